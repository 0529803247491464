//! Library root for `line-relay-bot`.
//!
//! The relay receives LINE webhook events, asks OpenAI for an answer to each
//! text message, and sends the answer back through the LINE reply API.
//!
//! - The webhook signature is checked over the raw body before anything else.
//! - Events in one request are answered one at a time, in order.
//! - If the model fails, a fixed fallback reply is sent instead.
//!
//! Both outbound services sit behind traits so that either can be swapped or
//! mocked.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Creates the runtime context with the LLM and chat clients, then serves the
/// webhook until shutdown.
pub async fn start(config: Config) -> Void {
    info!("Starting line-relay-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
