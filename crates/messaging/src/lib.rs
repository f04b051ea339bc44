//! # Agenda Messaging
//!
//! HTTP adapters for the two outbound collaborators of the webhook pipeline:
//!
//! - [`completion::OpenAiClient`]: an OpenAI-compatible chat-completions endpoint
//! - [`gateway::ZApiGateway`]: a Z-API WhatsApp instance
//!
//! Both implement the traits from `agenda_core::ports` and are configured from
//! the environment through [`config::MessagingConfig`].

pub mod completion;
pub mod config;
pub mod gateway;

pub mod mock;

use std::time::Duration;

use eyre::{Result, WrapErr};

/// Builds the shared HTTP client used by both adapters.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .wrap_err("Failed to build HTTP client")
}
