//! Command handlers. Each returns the JSON document the binary prints.

use postcraft_core::{Platform, Provider, SuggestionRequest};
use postcraft_error::{ConfigError, JsonError, PostcraftResult};
use postcraft_suggestions::{SuggestionService, fallback};
use tracing::instrument;

/// Run `suggest`.
#[instrument(skip(service, content))]
pub async fn handle_suggest(
    service: &SuggestionService,
    content: String,
    platform: Platform,
    provider: Provider,
    industry: Option<String>,
    audience: Option<String>,
) -> PostcraftResult<serde_json::Value> {
    let request = SuggestionRequest::builder()
        .content(content)
        .platform(platform)
        .provider(provider)
        .industry(industry)
        .target_audience(audience)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid suggestion request: {}", e)))?;

    let result = service.generate(&request).await;
    Ok(serde_json::to_value(&result).map_err(JsonError::from)?)
}

/// Run `trending`.
#[instrument(skip(service))]
pub async fn handle_trending(
    service: &SuggestionService,
    platform: Platform,
    category: Option<String>,
    provider: Provider,
) -> PostcraftResult<serde_json::Value> {
    let hashtags = service
        .trending_hashtags(platform, category.as_deref(), provider)
        .await;
    Ok(serde_json::to_value(&hashtags).map_err(JsonError::from)?)
}

/// Run `fallback`.
pub fn handle_fallback(content: &str, platform: Platform) -> PostcraftResult<serde_json::Value> {
    Ok(serde_json::to_value(fallback(content, platform)).map_err(JsonError::from)?)
}
