use std::{sync::Arc, time::Duration};

use agenda_api::{
    ApiState, build_router,
    handlers::webhook::{SUCCESS_MESSAGE, relay_reply},
    middleware::error_handling::FAILURE_MESSAGE,
};
use agenda_core::{
    errors::BookingError,
    models::message::{ChatMessage, ChatRole, InboundMessage},
    ports::CompletionProvider,
    prompt::FALLBACK_REPLY,
};
use agenda_db::mock::repositories::MockAppointmentStore;
use agenda_messaging::mock::MockMessagingGateway;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{TestContext, appointment_at};

fn inbound(phone: &str, message: &str) -> InboundMessage {
    InboundMessage {
        phone: phone.to_string(),
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_empty_completion_relays_fallback() {
    let mut ctx = TestContext::new();

    ctx.store
        .expect_list_appointments()
        .times(1)
        .returning(|| Ok(vec![]));
    ctx.completions
        .expect_complete()
        .times(1)
        .withf(|messages| {
            messages.len() == 1
                && messages[0].role == ChatRole::User
                && messages[0].content.contains("\"book me\"")
        })
        .returning(|_| Ok(None));
    ctx.gateway
        .expect_send_message()
        .times(1)
        .withf(|message| message.phone == "555" && message.message == FALLBACK_REPLY)
        .returning(|_| Ok(()));

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555", "message": "book me" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_provider_reply_is_relayed_verbatim() {
    let mut ctx = TestContext::new();

    ctx.store.expect_list_appointments().returning(|| Ok(vec![]));
    ctx.completions
        .expect_complete()
        .returning(|_| Ok(Some("We have 10h free. Shall I book it?".to_string())));
    ctx.gateway
        .expect_send_message()
        .times(1)
        .withf(|message| {
            message.phone == "5511999999999"
                && message.message == "We have 10h free. Shall I book it?"
        })
        .returning(|_| Ok(()));

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "5511999999999", "message": "any time today?" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_store_failure_short_circuits() {
    let mut ctx = TestContext::new();

    ctx.store
        .expect_list_appointments()
        .times(1)
        .returning(|| Err(eyre::eyre!("connection refused")));
    ctx.completions.expect_complete().times(0);
    ctx.gateway.expect_send_message().times(0);

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555", "message": "book me" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_completion_failure_skips_gateway() {
    let mut ctx = TestContext::new();

    ctx.store.expect_list_appointments().returning(|| Ok(vec![]));
    ctx.completions
        .expect_complete()
        .times(1)
        .returning(|_| Err(eyre::eyre!("Completion provider returned 401")));
    ctx.gateway.expect_send_message().times(0);

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555", "message": "book me" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_gateway_failure_is_a_failure() {
    let mut ctx = TestContext::new();

    ctx.store.expect_list_appointments().returning(|| Ok(vec![]));
    ctx.completions
        .expect_complete()
        .returning(|_| Ok(Some("10h?".to_string())));
    ctx.gateway
        .expect_send_message()
        .times(1)
        .returning(|_| Err(eyre::eyre!("Messaging gateway returned 400")));

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555", "message": "book me" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_missing_field_is_a_generic_failure() {
    let mut ctx = TestContext::new();

    ctx.store.expect_list_appointments().times(0);
    ctx.completions.expect_complete().times(0);
    ctx.gateway.expect_send_message().times(0);

    let server = ctx.server();
    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_non_json_body_is_a_generic_failure() {
    let server = TestContext::new().server();

    let response = server.post("/webhook").text("phone=555&message=hi").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_prompt_lists_only_free_slots() {
    let mut ctx = TestContext::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 12, 33).unwrap();
    let booked = Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap();
    let other_day = Utc.with_ymd_and_hms(2024, 6, 2, 14, 0, 0).unwrap();

    ctx.store
        .expect_list_appointments()
        .returning(move || Ok(vec![appointment_at(booked), appointment_at(other_day)]));
    ctx.completions
        .expect_complete()
        .times(1)
        .withf(|messages| {
            let prompt = &messages[0].content;
            prompt.contains("2024-06-01T09:00:00Z, 2024-06-01T10:00:00Z, 2024-06-01T12:00:00Z")
                && !prompt.contains("2024-06-01T11:00:00Z")
                && prompt.contains("2024-06-01T14:00:00Z")
                && prompt.contains("2024-06-01T17:00:00Z")
        })
        .returning(|_| Ok(Some("Would 9h suit you?".to_string())));
    ctx.gateway.expect_send_message().returning(|_| Ok(()));

    let state = ctx.build_state();
    let reply = relay_reply(&state, &inbound("555", "morning please"), now)
        .await
        .unwrap();

    assert_eq!(reply, "Would 9h suit you?");
}

#[tokio::test]
async fn test_relay_reply_tags_failing_step() {
    let mut ctx = TestContext::new();

    ctx.store
        .expect_list_appointments()
        .returning(|| Err(eyre::eyre!("timeout")));

    let state = ctx.build_state();
    let error = relay_reply(&state, &inbound("555", "hi"), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(error, BookingError::Store(_)));
}

struct StalledProvider;

#[async_trait]
impl CompletionProvider for StalledProvider {
    async fn complete(&self, _messages: &[ChatMessage]) -> eyre::Result<Option<String>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Some("too late".to_string()))
    }
}

#[tokio::test]
async fn test_pipeline_timeout_is_a_generic_failure() {
    let mut store = MockAppointmentStore::new();
    store.expect_list_appointments().returning(|| Ok(vec![]));
    let mut gateway = MockMessagingGateway::new();
    gateway.expect_send_message().times(0);

    let state = ApiState {
        appointments: Arc::new(store),
        completions: Arc::new(StalledProvider),
        gateway: Arc::new(gateway),
        request_timeout: Duration::from_millis(50),
    };
    let server = TestServer::new(build_router(Arc::new(state))).unwrap();

    let response = server
        .post("/webhook")
        .json(&json!({ "phone": "555", "message": "book me" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), FAILURE_MESSAGE);
}
