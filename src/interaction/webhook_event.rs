use tracing::{debug, info, instrument, warn};

use crate::{
    base::types::{TextMessageEvent, WebhookPayload},
    service::{chat::ChatClient, llm::LlmClient},
};

/// Handle every event in a webhook payload, in order.
///
/// Each text message is answered before the next event is looked at. Failures
/// are logged and never stop the remaining events, and neither does an event
/// that fails to decode.
#[instrument(skip_all, fields(events = payload.events.len()))]
pub async fn handle_webhook_payload(payload: WebhookPayload, fallback_reply: &str, llm: &LlmClient, chat: &ChatClient) {
    for event in payload.decoded_events() {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                warn!("Skipping malformed event: {}", err);
                continue;
            }
        };

        match event.as_text_message() {
            Some(message) => handle_text_message(message, fallback_reply, llm, chat).await,
            None => debug!("Skipping non-text event."),
        }
    }
}

/// Answer one text message: completion first, then the reply.
#[instrument(skip_all)]
pub async fn handle_text_message(message: TextMessageEvent, fallback_reply: &str, llm: &LlmClient, chat: &ChatClient) {
    let completion = llm.complete(&message.text).await;
    let reply_text = resolve_reply_text(completion, fallback_reply);

    match chat.reply_message(&message.reply_token, &reply_text).await {
        Ok(()) => info!("Replied to message."),
        Err(err) => warn!("Reply was not delivered: {}", err),
    }
}

/// Pick the text to send back: the completion, or the fallback if it failed.
pub fn resolve_reply_text<E>(completion: Result<String, E>, fallback_reply: &str) -> String
where
    E: std::fmt::Display,
{
    match completion {
        Ok(text) => text,
        Err(err) => {
            warn!("Completion failed, sending fallback: {}", err);
            fallback_reply.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::prompts::FALLBACK_REPLY;

    #[test]
    fn test_resolve_reply_text_success() {
        let completion: Result<String, anyhow::Error> = Ok("你好".to_string());
        assert_eq!(resolve_reply_text(completion, FALLBACK_REPLY), "你好");
    }

    #[test]
    fn test_resolve_reply_text_failure() {
        let completion: Result<String, anyhow::Error> = Err(anyhow::anyhow!("connection refused"));
        assert_eq!(resolve_reply_text(completion, FALLBACK_REPLY), "我暫時無法回應，請稍後再試。");
    }
}
