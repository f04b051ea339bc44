//! Collaborator interfaces used by the webhook pipeline.
//!
//! Handles are built once at startup and shared behind `Arc<dyn _>`, so every
//! trait here is object safe and `Send + Sync`.

use async_trait::async_trait;
use eyre::Result;

use crate::models::{
    appointment::Appointment,
    message::{ChatMessage, OutboundMessage},
};

/// Read access to booked appointments.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Returns every stored appointment, unfiltered.
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;
}

/// A language-completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `messages` as one conversation and returns the reply text, if any.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>>;
}

/// Outbound delivery of text messages to a customer's phone.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send_message(&self, message: &OutboundMessage) -> Result<()>;
}
