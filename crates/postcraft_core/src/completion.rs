//! Provider-neutral completion request.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single prompt sent to a provider adapter.
///
/// Adapters translate this into their own wire shape; the request itself
/// knows nothing about chat messages or content blocks.
///
/// # Examples
///
/// ```
/// use postcraft_core::CompletionRequest;
///
/// let req = CompletionRequest::builder()
///     .prompt("Suggest hashtags")
///     .system(Some("Respond in JSON".to_string()))
///     .max_tokens(512u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(req.prompt(), "Suggest hashtags");
/// assert_eq!(*req.temperature(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct CompletionRequest {
    /// User-facing prompt text
    prompt: String,
    /// Optional system instruction
    #[builder(default)]
    system: Option<String>,
    /// Maximum tokens the provider may generate
    #[builder(default = "1024")]
    max_tokens: u32,
    /// Optional sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl CompletionRequest {
    /// Creates a builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}
