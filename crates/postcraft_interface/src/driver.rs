//! The provider adapter seam.

use async_trait::async_trait;
use postcraft_core::CompletionRequest;
use postcraft_error::ProviderError;

/// Uniform interface over hosted LLM backends.
///
/// One call issues exactly one request. Implementations do not retry; a
/// failure is returned to the caller as-is. Each implementation is
/// responsible for reducing its provider's response shape to plain text.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send `req` and return the model's text output.
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError>;

    /// Name of the backend, for logs.
    fn provider_name(&self) -> &'static str;

    /// Model identifier requests are sent to.
    fn model_name(&self) -> &str;
}

