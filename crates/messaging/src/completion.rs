use agenda_core::{models::message::ChatMessage, ports::CompletionProvider};
use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::config::MessagingConfig;

/// Chat-completions client for OpenAI and API-compatible providers.
pub struct OpenAiClient {
    /// Chat-completions endpoint
    api_url: String,
    /// Bearer token
    api_key: String,
    /// Model name
    model: String,
    /// HTTP client
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    pub fn from_config(config: &MessagingConfig, client: reqwest::Client) -> Self {
        Self::new(
            &config.openai_api_url,
            &config.openai_api_key,
            &config.openai_model,
            client,
        )
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .wrap_err("Failed to reach completion provider")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(eyre!("Completion provider returned {}: {}", status, error_text));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .wrap_err("Malformed completion response")?;

        // Only the first choice is relayed.
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        tracing::debug!(model = %self.model, has_content = content.is_some(), "Completion received");
        Ok(content)
    }
}
