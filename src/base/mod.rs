//! Core components, types, and utilities for the relay.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The fixed prompt prefix and fallback reply.
//! - Webhook payload types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
