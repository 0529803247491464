//! Runtime services and shared state for the relay.

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::{Res, Void}},
    interaction::routes,
    service::{chat::ChatClient, llm::LlmClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration and the outbound clients, and is the
/// state handed to every request handler. It is designed to be trivially
/// cloneable, allowing it to be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LLM client.
        let llm = LlmClient::openai(&config)?;

        // Initialize the chat client.
        let chat = ChatClient::line(&config)?;

        Ok(Self { config, llm, chat })
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn start(&self) -> Void {
        let listener = TcpListener::bind(self.config.bind_address()).await?;

        info!("Server running on {}", listener.local_addr()?);

        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C.
    pub async fn serve(&self, listener: TcpListener) -> Void {
        let app = routes::router(self.clone());

        axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

        info!("Server stopped.");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
