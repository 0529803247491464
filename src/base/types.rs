//! Shared result aliases and the LINE webhook payload types.

use serde::Deserialize;
use serde_json::Value;

/// Error type used throughout the crate.
pub type Err = anyhow::Error;
/// Result with the crate error type.
pub type Res<T> = Result<T, Err>;
/// Result carrying no value.
pub type Void = Res<()>;

/// The body LINE posts to the webhook endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct WebhookPayload {
    /// User ID of the bot that should receive the events.
    #[serde(default)]
    pub destination: Option<String>,
    /// Events in delivery order, still undecoded.
    ///
    /// Each event is decoded on its own so one malformed event does not hide
    /// the others.
    #[serde(default)]
    pub events: Vec<Value>,
}

impl WebhookPayload {
    /// Decode each event in order.
    pub fn decoded_events(&self) -> impl Iterator<Item = Result<WebhookEvent, serde_json::Error>> + '_ {
        self.events.iter().map(WebhookEvent::deserialize)
    }
}

/// A single webhook event.
///
/// Only message events carry anything we act on; every other kind (follow,
/// unfollow, postback, join, ...) lands in `Other`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebhookEvent {
    /// A user sent a message.
    #[serde(rename_all = "camelCase")]
    Message {
        /// Token for replying to this message.
        #[serde(default)]
        reply_token: Option<String>,
        /// The message itself.
        message: EventMessage,
    },
    /// Any other event kind.
    #[serde(other)]
    Other,
}

/// The message object inside a message event.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventMessage {
    /// A plain text message.
    Text {
        /// What the user wrote.
        text: String,
    },
    /// Stickers, images, and every other message kind.
    #[serde(other)]
    Other,
}

/// A text message that should be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessageEvent {
    /// What the user wrote.
    pub text: String,
    /// Token for replying to the message.
    pub reply_token: String,
}

impl WebhookEvent {
    /// Returns the text and reply token if this is a text message event.
    pub fn as_text_message(&self) -> Option<TextMessageEvent> {
        match self {
            WebhookEvent::Message {
                reply_token: Some(reply_token),
                message: EventMessage::Text { text },
            } => Some(TextMessageEvent {
                text: text.clone(),
                reply_token: reply_token.clone(),
            }),
            _ => None,
        }
    }
}
