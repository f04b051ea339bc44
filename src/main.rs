use std::sync::Arc;

use agenda_api::{config::ApiConfig, ApiState};
use agenda_db::{create_pool, schema::initialize_database, store::PgAppointmentStore};
use agenda_messaging::{
    completion::OpenAiClient, config::MessagingConfig, gateway::ZApiGateway, http_client,
};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration; missing credentials stop startup here
    let config = ApiConfig::from_env()?;
    let messaging = MessagingConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Build long-lived collaborator handles
    let client = http_client(messaging.http_timeout)?;
    let state = ApiState {
        appointments: Arc::new(PgAppointmentStore::new(db_pool)),
        completions: Arc::new(OpenAiClient::from_config(&messaging, client.clone())),
        gateway: Arc::new(ZApiGateway::from_config(&messaging, client)),
        request_timeout: config.request_timeout(),
    };

    // Start API server
    agenda_api::start_server(config, state).await?;

    Ok(())
}
