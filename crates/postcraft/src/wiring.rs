//! Construction of provider clients and the suggestion service.

use crate::{Credentials, PostcraftConfig};
use postcraft_core::Provider;
use postcraft_models::{AnthropicClient, OpenAiClient};
use postcraft_suggestions::{ProviderRegistry, SuggestionService};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Create a client for every provider that has an API key.
#[instrument(skip_all)]
pub fn build_registry(config: &PostcraftConfig, credentials: &Credentials) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();

    match credentials.api_key(Provider::OpenAi) {
        Some(key) => {
            let settings = config.openai();
            info!(model = %settings.model(), "OpenAI provider configured");
            registry = registry.with(
                Provider::OpenAi,
                Arc::new(OpenAiClient::with_base_url(
                    key,
                    settings.model().clone(),
                    settings.base_url().clone(),
                )),
            );
        }
        None => warn!("OPENAI_API_KEY not set; openai requests will use fallback suggestions"),
    }

    match credentials.api_key(Provider::Anthropic) {
        Some(key) => {
            let settings = config.anthropic();
            info!(model = %settings.model(), "Anthropic provider configured");
            registry = registry.with(
                Provider::Anthropic,
                Arc::new(AnthropicClient::with_base_url(
                    key,
                    settings.model().clone(),
                    settings.base_url().clone(),
                )),
            );
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; anthropic requests will use fallback suggestions")
        }
    }

    registry
}

/// Build the suggestion service from configuration and credentials.
pub fn build_service(config: &PostcraftConfig, credentials: &Credentials) -> SuggestionService {
    SuggestionService::new(build_registry(config, credentials)).with_settings(*config.generation())
}
