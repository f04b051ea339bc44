//! # Agenda API
//!
//! The API crate provides the web server for the Agenda scheduling assistant.
//! It exposes the inbound chat webhook and a couple of operational endpoints.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: The webhook orchestrator (store read, availability, prompt, completion, relay)
//! - **Middleware**: Mapping of pipeline errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Collaborators are injected through [`ApiState`] as trait objects, so the
//! server never reaches a database or external API directly.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use agenda_core::ports::{AppointmentStore, CompletionProvider, MessagingGateway};
use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds long-lived handles to the three collaborators of the webhook pipeline.
/// Nothing in here is mutated after startup.
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState {
///     appointments: Arc::new(PgAppointmentStore::new(db_pool)),
///     completions: Arc::new(OpenAiClient::from_config(&messaging, client.clone())),
///     gateway: Arc::new(ZApiGateway::from_config(&messaging, client)),
///     request_timeout: Duration::from_secs(30),
/// });
/// let app = build_router(state);
/// ```
pub struct ApiState {
    /// Source of booked appointments
    pub appointments: Arc<dyn AppointmentStore>,
    /// Language-completion provider that negotiates the booking
    pub completions: Arc<dyn CompletionProvider>,
    /// Outbound channel back to the customer
    pub gateway: Arc<dyn MessagingGateway>,
    /// Upper bound for one webhook pipeline run
    pub request_timeout: Duration,
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Inbound chat webhook
        .merge(routes::webhook::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Starts the API server with the provided configuration and collaborators
///
/// Initializes logging, builds the router and serves until the listener fails.
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// start_server(config, state).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = build_router(Arc::new(state));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
