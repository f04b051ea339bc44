//! # Agenda Core
//!
//! Domain types and the pure scheduling logic shared by every other crate:
//!
//! - **Models**: appointments and the message shapes exchanged with collaborators
//! - **Errors**: the tagged failure taxonomy of the booking pipeline
//! - **Ports**: traits the API layer depends on, implemented by the db and messaging crates
//! - **Availability**: the free-slot resolver
//! - **Prompt**: prompt composition and reply fallback

pub mod availability;
pub mod errors;
pub mod models;
pub mod ports;
pub mod prompt;
