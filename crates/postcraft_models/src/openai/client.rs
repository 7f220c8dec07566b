//! Client for the chat completions API.

use crate::openai::{ChatResponse, conversions};
use async_trait::async_trait;
use postcraft_core::CompletionRequest;
use postcraft_error::{ProviderError, ProviderErrorKind};
use postcraft_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default API root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat completions client requesting JSON-object responses.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client against the public API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_OPENAI_BASE_URL)
    }

    /// Creates a new client against `base_url` (without the `/chat/completions` suffix).
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model = model.into();
        let base_url = base_url.into();

        debug!(model = %model, url = %base_url, "Created OpenAI client");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            message_count = chat_request.messages().len(),
            max_tokens = *req.max_tokens(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(ProviderError::new(ProviderErrorKind::from_status(
                status.as_u16(),
                error_text,
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ProviderError::new(ProviderErrorKind::MalformedBody(e.to_string()))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
