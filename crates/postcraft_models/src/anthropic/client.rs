//! Client for the Anthropic messages API.

use crate::anthropic::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use postcraft_core::CompletionRequest;
use postcraft_error::{ProviderError, ProviderErrorKind};
use postcraft_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default API root.
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages API client.
///
/// Sends a single user message per request. A system instruction, when
/// present, is placed ahead of the prompt inside that message.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new client against the public API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_ANTHROPIC_BASE_URL)
    }

    /// Creates a new client against `base_url` (without the `/v1/messages` suffix).
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model = model.into();
        let base_url = base_url.into();

        debug!(model = %model, url = %base_url, "Created Anthropic client");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    /// Builds the wire request for `req`.
    pub fn to_request(&self, req: &CompletionRequest) -> Result<AnthropicRequest, ProviderError> {
        let text = match req.system() {
            Some(system) => format!("{}\n\n{}", system, req.prompt()),
            None => req.prompt().clone(),
        };

        let message = AnthropicMessage::builder()
            .role("user")
            .content(vec![AnthropicContentBlock::Text { text }])
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::MalformedBody(e.to_string())))?;

        AnthropicRequest::builder()
            .model(self.model.clone())
            .messages(vec![message])
            .max_tokens(*req.max_tokens())
            .temperature(*req.temperature())
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::MalformedBody(e.to_string())))
    }
}

/// Returns the text of the first content block, which must be of type `text`.
pub fn first_text_block(response: &AnthropicResponse) -> Result<String, ProviderError> {
    let block = response
        .content()
        .first()
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))?;

    match (block.content_type().as_str(), block.text()) {
        ("text", Some(text)) => Ok(text.clone()),
        (other, _) => Err(ProviderError::new(ProviderErrorKind::NonTextContent(
            other.to_string(),
        ))),
    }
}

#[async_trait]
impl CompletionDriver for AnthropicClient {
    #[instrument(skip(self, req), fields(provider = "anthropic", model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let request = self.to_request(req)?;

        debug!(max_tokens = *request.max_tokens(), "Sending request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
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

        let body: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ProviderError::new(ProviderErrorKind::MalformedBody(e.to_string()))
        })?;

        debug!(
            blocks = body.content().len(),
            stop_reason = ?body.stop_reason(),
            "Received response"
        );

        first_text_block(&body)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
