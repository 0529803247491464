//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::{Res, Void};

/// Default port to listen on.
fn default_port() -> u16 {
    3000
}

/// Default interface to bind.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default OpenAI model to use.
fn default_openai_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Default OpenAI API base URL.
fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default LINE Messaging API base URL.
fn default_line_api_base_url() -> String {
    "https://api.line.me".to_string()
}

/// Default prefix prepended to user messages.
fn default_reply_prompt_prefix() -> String {
    prompts::REPLY_PROMPT_PREFIX.to_string()
}

/// Default reply when the model fails.
fn default_fallback_reply() -> String {
    prompts::FALLBACK_REPLY.to_string()
}

/// Default timeout for each outbound request, in seconds.
fn default_request_timeout_secs() -> u64 {
    30
}

/// Configuration for the relay.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// The shared values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// The configuration values, one per environment variable.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Port to listen on (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interface to bind (`HOST`).
    #[serde(default = "default_host")]
    pub host: String,
    /// OpenAI API key (`OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// OpenAI model to use (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// OpenAI API base URL (`OPENAI_BASE_URL`).
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    /// Prefix prepended to each user message (`REPLY_PROMPT_PREFIX`).
    #[serde(default = "default_reply_prompt_prefix")]
    pub reply_prompt_prefix: String,
    /// Reply sent when the model fails (`FALLBACK_REPLY`).
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
    /// LINE channel access token (`LINE_CHANNEL_ACCESS_TOKEN`).
    pub line_channel_access_token: String,
    /// LINE channel secret used to sign webhooks (`LINE_CHANNEL_SECRET`).
    pub line_channel_secret: String,
    /// LINE Messaging API base URL (`LINE_API_BASE_URL`).
    #[serde(default = "default_line_api_base_url")]
    pub line_api_base_url: String,
    /// Timeout for each outbound request, in seconds (`REQUEST_TIMEOUT_SECS`).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            openai_api_key: String::new(),
            openai_model: default_openai_model(),
            openai_base_url: default_openai_base_url(),
            reply_prompt_prefix: default_reply_prompt_prefix(),
            fallback_reply: default_fallback_reply(),
            line_channel_access_token: String::new(),
            line_channel_secret: String::new(),
            line_api_base_url: default_line_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the configuration from the environment, layered over an optional TOML file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        // Environment variables override the file.
        cfg = cfg.add_source(config::Environment::default());

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check the loaded values.
    pub fn validate(&self) -> Void {
        if self.openai_api_key.is_empty() {
            return Err(anyhow::anyhow!("OPENAI_API_KEY must be set."));
        }

        if self.line_channel_access_token.is_empty() {
            return Err(anyhow::anyhow!("LINE_CHANNEL_ACCESS_TOKEN must be set."));
        }

        if self.line_channel_secret.is_empty() {
            return Err(anyhow::anyhow!("LINE_CHANNEL_SECRET must be set."));
        }

        if self.request_timeout_secs < 1 || self.request_timeout_secs > 300 {
            return Err(anyhow::anyhow!("Request timeout must be between 1 and 300 seconds."));
        }

        Ok(())
    }

    /// The address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
