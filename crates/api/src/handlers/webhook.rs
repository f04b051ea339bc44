//! # Webhook Handler
//!
//! Orchestrates one inbound chat message end to end:
//!
//! 1. Load every booked appointment from the store
//! 2. Resolve today's free slots relative to "now"
//! 3. Compose a prompt embedding the customer's message and the free slots
//! 4. Ask the completion provider for a reply (falling back to a fixed phrase)
//! 5. Relay the reply to the customer's phone through the messaging gateway
//! 6. Acknowledge the webhook call
//!
//! Steps run strictly in order; each network call is awaited before the next
//! starts. Any failure aborts the run and is answered with a generic 500 by
//! [`AppError`].

use std::sync::Arc;

use agenda_core::{
    availability::available_slots,
    errors::{BookingError, BookingResult},
    models::message::{ChatMessage, InboundMessage, OutboundMessage},
    prompt::{FALLBACK_REPLY, compose_prompt, reply_text},
};
use axum::{extract::{rejection::JsonRejection, State}, Json};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Body returned once the reply has been handed to the gateway.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully.";

/// Receives one inbound chat message
///
/// # Endpoint
///
/// ```text
/// POST /webhook
/// {"phone": "5511999999999", "message": "Can I come in this afternoon?"}
/// ```
///
/// # Returns
///
/// * `200` with [`SUCCESS_MESSAGE`] when the reply was relayed
/// * `500` with a generic message for any failure, including a malformed body
#[axum::debug_handler]
pub async fn receive_message(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<InboundMessage>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let Json(event) =
        payload.map_err(|rejection| BookingError::Validation(rejection.body_text()))?;

    tokio::time::timeout(state.request_timeout, relay_reply(&state, &event, Utc::now()))
        .await
        .map_err(|elapsed| BookingError::Internal(Box::new(elapsed)))??;

    Ok(SUCCESS_MESSAGE)
}

/// Runs steps 1 to 5 of the pipeline with `now` as the reference instant
///
/// Returns the text that was relayed to the customer.
///
/// # Errors
///
/// * `BookingError::Store` - The appointment store could not be read
/// * `BookingError::Completion` - The completion provider failed
/// * `BookingError::Gateway` - The messaging gateway rejected or never received the reply
pub async fn relay_reply(
    state: &ApiState,
    event: &InboundMessage,
    now: DateTime<Utc>,
) -> BookingResult<String> {
    // STEP 1: Load state
    let appointments = state
        .appointments
        .list_appointments()
        .await
        .map_err(BookingError::Store)?;

    // STEP 2: Compute availability
    let slots = available_slots(&now, &appointments);
    debug!(
        appointments = appointments.len(),
        free_slots = slots.len(),
        "Resolved availability"
    );

    // STEP 3: Compose prompt
    let prompt = compose_prompt(&event.message, &slots);

    // STEP 4: Delegate to the completion provider
    let completion = state
        .completions
        .complete(&[ChatMessage::user(prompt)])
        .await
        .map_err(BookingError::Completion)?;
    let reply = reply_text(completion);
    let used_fallback = reply == FALLBACK_REPLY;

    // STEP 5: Relay the reply
    let outbound = OutboundMessage {
        phone: event.phone.clone(),
        message: reply,
    };
    state
        .gateway
        .send_message(&outbound)
        .await
        .map_err(BookingError::Gateway)?;

    info!(
        phone = %outbound.phone,
        free_slots = slots.len(),
        used_fallback,
        "Reply relayed"
    );

    Ok(outbound.message)
}
