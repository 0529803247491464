//! Fixed texts sent to the model and back to users.

/// Prefix prepended to every user message before it is sent to the model.
///
/// Asks the model to answer in Traditional Chinese.
pub const REPLY_PROMPT_PREFIX: &str = "請用繁體中文回答：";

/// Reply sent when the model cannot produce an answer.
pub const FALLBACK_REPLY: &str = "我暫時無法回應，請稍後再試。";

/// Build the completion input for a user message.
pub fn build_completion_input(prefix: &str, user_text: &str) -> String {
    format!("{prefix}{user_text}")
}
