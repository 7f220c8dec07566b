//! Caller-facing suggestion request.

use crate::{Platform, Provider};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What the caller wants suggestions for.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct SuggestionRequest {
    /// Post text the suggestions should fit
    content: String,
    /// Target social network
    platform: Platform,
    /// Optional industry hint
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    industry: Option<String>,
    /// Optional audience hint
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_audience: Option<String>,
    /// Backend that should service the request
    #[builder(default)]
    #[serde(default)]
    provider: Provider,
}

impl SuggestionRequest {
    /// Creates a builder for `SuggestionRequest`.
    pub fn builder() -> SuggestionRequestBuilder {
        SuggestionRequestBuilder::default()
    }
}
