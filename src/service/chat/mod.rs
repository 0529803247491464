pub mod line;
pub mod signature;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the outbound half of a chat platform integration.
/// Implementing this trait allows a different messaging service to be used
/// with the relay.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Reply to a message using the token that came with it.
    ///
    /// The token is passed through as-is; whether it is still valid is up to
    /// the platform, and a rejection surfaces as an error.
    async fn reply_message(&self, reply_token: &str, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    /// Wrap any chat client implementation.
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
