//! OpenAI Responses API client.
//!
//! Sends the user message (with the configured instruction prefix) to
//! `POST /responses` and pulls the generated text out of the first content
//! item of the first output item.

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    prompts::build_completion_input,
    types::Res,
};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Res<Self> {
        let client = OpenAiLlmClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Request types.

#[derive(Debug, Serialize)]
struct CreateResponseRequest<'a> {
    model: &'a str,
    input: String,
}

// Specific implementations.

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    http: reqwest::Client,
    config: Config,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI LLM client.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout_secs)).build()?;

        Ok(Self { http, config: config.clone() })
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.config.openai_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::complete", skip_all)]
    async fn complete(&self, user_text: &str) -> Res<String> {
        let request = CreateResponseRequest {
            model: &self.config.openai_model,
            input: build_completion_input(&self.config.reply_prompt_prefix, user_text),
        };

        let response = self.http.post(self.responses_url()).bearer_auth(&self.config.openai_api_key).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("OpenAI response ({}): {}", status, body);

        if !status.is_success() {
            return Err(anyhow!("OpenAI returned {status}"));
        }

        let data: Value = serde_json::from_str(&body)?;

        extract_output_text(&data).map(str::to_string).ok_or_else(|| anyhow!("OpenAI response has no output text"))
    }
}

// Helpers.

/// Pull `output[0].content[0].text` out of a Responses API body.
///
/// Empty text counts as missing.
pub fn extract_output_text(data: &Value) -> Option<&str> {
    data.get("output")?
        .get(0)?
        .get("content")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_output_text() {
        let data = json!({"output": [{"content": [{"text": "你好"}]}]});
        assert_eq!(extract_output_text(&data), Some("你好"));
    }

    #[test]
    fn test_extract_output_text_full_response() {
        let data = json!({
            "id": "resp_123",
            "object": "response",
            "status": "completed",
            "output": [{
                "type": "message",
                "id": "msg_123",
                "role": "assistant",
                "content": [{"type": "output_text", "text": "哈囉！", "annotations": []}]
            }]
        });

        assert_eq!(extract_output_text(&data), Some("哈囉！"));
    }

    #[test]
    fn test_extract_output_text_missing() {
        assert_eq!(extract_output_text(&json!({})), None);
        assert_eq!(extract_output_text(&json!({"output": []})), None);
        assert_eq!(extract_output_text(&json!({"output": [{"content": []}]})), None);
        assert_eq!(extract_output_text(&json!({"output": [{"content": [{"text": 42}]}]})), None);
        assert_eq!(extract_output_text(&json!({"output": [{"content": [{"text": ""}]}]})), None);
        assert_eq!(extract_output_text(&json!({"error": {"message": "Incorrect API key provided"}})), None);
    }

    #[test]
    fn test_responses_url_trims_trailing_slash() {
        let config = Config::from(crate::base::config::ConfigInner {
            openai_base_url: "http://localhost:9000/v1/".to_string(),
            ..Default::default()
        });

        let client = OpenAiLlmClient::new(&config).unwrap();
        assert_eq!(client.responses_url(), "http://localhost:9000/v1/responses");
    }
}
