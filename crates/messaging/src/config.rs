use eyre::{eyre, Result};
use std::env;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_ZAPI_BASE_URL: &str = "https://api.z-api.io";

/// Credentials and endpoints for the completion provider and messaging gateway.
///
/// Missing credentials are a startup error so the server never comes up in a
/// state where every webhook call would fail.
#[derive(Clone)]
pub struct MessagingConfig {
    /// API key for the completion provider (required)
    pub openai_api_key: String,
    /// Model identifier sent with every completion request
    pub openai_model: String,
    /// Full chat-completions endpoint URL
    pub openai_api_url: String,
    /// Z-API instance identifier (required)
    pub zapi_instance_id: String,
    /// Z-API instance token (required)
    pub zapi_token: String,
    /// Account security token, sent as the `Client-Token` header when set
    pub zapi_client_token: Option<String>,
    /// Z-API base URL, without trailing slash
    pub zapi_base_url: String,
    /// Per-call timeout for outbound HTTP requests, in seconds
    pub http_timeout: u64,
}

impl MessagingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| eyre!("{} environment variable not set", key))
        };

        let openai_api_key = required("OPENAI_API_KEY")?;
        let zapi_instance_id = required("ZAPI_INSTANCE_ID")?;
        let zapi_token = required("ZAPI_TOKEN")?;

        let openai_model =
            lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
        let openai_api_url =
            lookup("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());
        let zapi_base_url = lookup("ZAPI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ZAPI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let zapi_client_token =
            lookup("ZAPI_CLIENT_TOKEN").filter(|value| !value.trim().is_empty());

        let http_timeout = lookup("HTTP_TIMEOUT_SECONDS")
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| eyre!("HTTP_TIMEOUT_SECONDS must be a whole number of seconds"))
            })
            .transpose()?
            .unwrap_or(30);
        if http_timeout == 0 {
            return Err(eyre!("HTTP_TIMEOUT_SECONDS must be at least 1"));
        }

        Ok(Self {
            openai_api_key,
            openai_model,
            openai_api_url,
            zapi_instance_id,
            zapi_token,
            zapi_client_token,
            zapi_base_url,
            http_timeout,
        })
    }

    /// Z-API endpoint that delivers a text message.
    pub fn send_message_url(&self) -> String {
        format!(
            "{}/{}/token/{}/send-message",
            self.zapi_base_url, self.zapi_instance_id, self.zapi_token
        )
    }
}
