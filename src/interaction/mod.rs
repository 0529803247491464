//! Webhook handling for the relay.
//!
//! This module provides:
//! - The HTTP routes (liveness and the signed webhook endpoint)
//! - Dispatching text message events to the LLM and back to the chat platform

pub mod routes;
pub mod webhook_event;
