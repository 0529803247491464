pub mod openai;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// Implementing this trait allows a different completion provider to be
/// plugged into the relay, and lets tests substitute a mock.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate a reply for a user message.
    ///
    /// Returns the generated text, or an error on any transport, status, or
    /// parse failure. Callers decide what to send when this fails.
    async fn complete(&self, user_text: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    /// Wrap any LLM client implementation.
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
