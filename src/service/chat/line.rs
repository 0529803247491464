//! LINE Messaging API client.

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{Res, Void},
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the line implementation.

impl ChatClient {
    /// Creates a new LINE chat client.
    pub fn line(config: &Config) -> Res<Self> {
        let client = LineChatClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Request types.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyMessageRequest<'a> {
    reply_token: &'a str,
    messages: Vec<OutgoingMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum OutgoingMessage<'a> {
    Text { text: &'a str },
}

// Structs.

/// LINE client implementation.
#[derive(Clone)]
pub struct LineChatClient {
    http: reqwest::Client,
    access_token: String,
    api_base_url: String,
}

impl LineChatClient {
    /// Create a new LINE chat client.
    #[instrument(name = "LineChatClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout_secs)).build()?;

        Ok(Self {
            http,
            access_token: config.line_channel_access_token.clone(),
            api_base_url: config.line_api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GenericChatClient for LineChatClient {
    #[instrument(name = "LineChatClient::reply_message", skip(self, text))]
    async fn reply_message(&self, reply_token: &str, text: &str) -> Void {
        let request = ReplyMessageRequest {
            reply_token,
            messages: vec![OutgoingMessage::Text { text }],
        };

        let url = format!("{}/v2/bot/message/reply", self.api_base_url);

        let response = self.http.post(url).bearer_auth(&self.access_token).json(&request).send().await.map_err(|e| anyhow!("Failed to send reply: {}", e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        debug!("LINE reply ({}): {}", status, body);

        if !status.is_success() {
            return Err(anyhow!("LINE rejected reply with {status}: {body}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_request_serialization() {
        let request = ReplyMessageRequest {
            reply_token: "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
            messages: vec![OutgoingMessage::Text { text: "你好" }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                "messages": [{"type": "text", "text": "你好"}]
            })
        );
    }
}
