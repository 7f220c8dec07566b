//! The suggestion orchestrator.

use crate::fallback::{fallback, fallback_trending};
use crate::metrics::SuggestionMetrics;
use crate::prompt::{PromptParts, build_prompt, build_trending_prompt};
use crate::registry::ProviderRegistry;
use crate::validator::{parse_trending, validate};
use postcraft_core::{
    CompletionRequest, Platform, Provider, SuggestionRequest, SuggestionResult, TrendingHashtag,
};
use postcraft_error::{ConfigError, JsonError, PostcraftResult};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, instrument, warn};

const GENERATE: &str = "generate";
const TRENDING: &str = "trending";

/// Token budget and sampling temperature for provider calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// Maximum tokens the provider may generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Produces suggestions from a hosted model, degrading to static tables.
///
/// Neither [`generate`](Self::generate) nor
/// [`trending_hashtags`](Self::trending_hashtags) can fail: every provider or
/// parse error is logged and answered from the static fallback tables.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    providers: ProviderRegistry,
    settings: GenerationSettings,
    metrics: SuggestionMetrics,
}

impl SuggestionService {
    /// Create a service over `providers` with default settings.
    pub fn new(providers: ProviderRegistry) -> Self {
        Self {
            providers,
            settings: GenerationSettings::default(),
            metrics: SuggestionMetrics::new(),
        }
    }

    /// Override the token budget and temperature.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The registered provider clients.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Emoji, hashtag and placement suggestions for `request`.
    #[instrument(
        skip(self, request),
        fields(platform = %request.platform(), provider = %request.provider())
    )]
    pub async fn generate(&self, request: &SuggestionRequest) -> SuggestionResult {
        let provider = *request.provider();
        self.metrics.record_request(provider.as_ref(), GENERATE);

        match self.try_generate(request).await {
            Ok(result) => {
                debug!(
                    emojis = result.emojis().len(),
                    hashtags = result.hashtags().len(),
                    "Provider suggestions accepted"
                );
                result
            }
            Err(e) => {
                warn!(error = %e, "Suggestion generation failed, using fallback");
                self.metrics.record_fallback(provider.as_ref(), GENERATE);
                fallback(request.content(), *request.platform())
            }
        }
    }

    /// Hashtags currently trending on `platform`, optionally within `category`.
    #[instrument(skip(self), fields(platform = %platform, provider = %provider))]
    pub async fn trending_hashtags(
        &self,
        platform: Platform,
        category: Option<&str>,
        provider: Provider,
    ) -> Vec<TrendingHashtag> {
        self.metrics.record_request(provider.as_ref(), TRENDING);

        match self.try_trending(platform, category, provider).await {
            Ok(hashtags) => {
                debug!(count = hashtags.len(), "Provider trending hashtags accepted");
                hashtags
            }
            Err(e) => {
                warn!(error = %e, "Trending lookup failed, using fallback");
                self.metrics.record_fallback(provider.as_ref(), TRENDING);
                fallback_trending()
            }
        }
    }

    async fn try_generate(&self, request: &SuggestionRequest) -> PostcraftResult<SuggestionResult> {
        let prompt = build_prompt(
            request.content(),
            *request.platform(),
            request.industry().as_deref(),
            request.target_audience().as_deref(),
        );
        let parsed = self.complete_json(*request.provider(), prompt, GENERATE).await?;

        if !parsed.is_object() {
            return Err(JsonError::new("Expected a JSON object of suggestions").into());
        }
        Ok(validate(parsed))
    }

    async fn try_trending(
        &self,
        platform: Platform,
        category: Option<&str>,
        provider: Provider,
    ) -> PostcraftResult<Vec<TrendingHashtag>> {
        let prompt = build_trending_prompt(platform, category);
        let parsed = self.complete_json(provider, prompt, TRENDING).await?;

        parse_trending(parsed)
            .ok_or_else(|| JsonError::new("Expected an array of trending hashtags").into())
    }

    /// One provider round trip, decoded as JSON.
    async fn complete_json(
        &self,
        provider: Provider,
        prompt: PromptParts,
        operation: &'static str,
    ) -> PostcraftResult<Value> {
        let driver = self.providers.get(provider)?;

        let request = CompletionRequest::builder()
            .prompt(prompt.user)
            .system(Some(prompt.system))
            .max_tokens(self.settings.max_tokens)
            .temperature(Some(self.settings.temperature))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid completion request: {}", e)))?;

        debug!(model = driver.model_name(), "Calling provider");
        let started = Instant::now();
        let outcome = driver.complete(&request).await;
        self.metrics.record_duration(
            driver.provider_name(),
            operation,
            started.elapsed().as_secs_f64(),
        );

        let text = outcome?;
        let parsed = serde_json::from_str(&text).map_err(JsonError::from)?;
        Ok(parsed)
    }
}
