use agenda_core::{models::message::OutboundMessage, ports::MessagingGateway};
use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};

use crate::config::MessagingConfig;

/// Sends WhatsApp text messages through a Z-API instance.
pub struct ZApiGateway {
    send_url: String,
    client_token: Option<String>,
    client: reqwest::Client,
}

impl ZApiGateway {
    pub fn new(
        send_url: impl Into<String>,
        client_token: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            send_url: send_url.into(),
            client_token,
            client,
        }
    }

    pub fn from_config(config: &MessagingConfig, client: reqwest::Client) -> Self {
        Self::new(
            config.send_message_url(),
            config.zapi_client_token.clone(),
            client,
        )
    }
}

#[async_trait]
impl MessagingGateway for ZApiGateway {
    async fn send_message(&self, message: &OutboundMessage) -> Result<()> {
        let mut request = self.client.post(&self.send_url).json(message);
        if let Some(token) = &self.client_token {
            request = request.header("Client-Token", token);
        }

        let response = request
            .send()
            .await
            .wrap_err("Failed to reach messaging gateway")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(eyre!("Messaging gateway returned {}: {}", status, error_text));
        }

        tracing::debug!(phone = %message.phone, "Message accepted by gateway");
        Ok(())
    }
}
