//! Provider clients handed to the service at construction.

use postcraft_core::Provider;
use postcraft_error::{ProviderError, ProviderErrorKind};
use postcraft_interface::CompletionDriver;
use std::sync::Arc;

/// The configured driver for each [`Provider`].
///
/// Built once at start-up and shared read-only. A provider without a driver
/// (for example, no API key in the environment) is reported as
/// [`ProviderErrorKind::NotConfigured`] when selected.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    openai: Option<Arc<dyn CompletionDriver>>,
    anthropic: Option<Arc<dyn CompletionDriver>>,
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `driver` as the client for `provider`, replacing any previous one.
    pub fn with(mut self, provider: Provider, driver: Arc<dyn CompletionDriver>) -> Self {
        *self.slot_mut(provider) = Some(driver);
        self
    }

    /// The driver for `provider`.
    pub fn get(&self, provider: Provider) -> Result<&Arc<dyn CompletionDriver>, ProviderError> {
        self.slot(provider).as_ref().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::NotConfigured(provider.to_string()))
        })
    }

    /// True when a driver is registered for `provider`.
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.slot(provider).is_some()
    }

    fn slot(&self, provider: Provider) -> &Option<Arc<dyn CompletionDriver>> {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Anthropic => &self.anthropic,
        }
    }

    fn slot_mut(&mut self, provider: Provider) -> &mut Option<Arc<dyn CompletionDriver>> {
        match provider {
            Provider::OpenAi => &mut self.openai,
            Provider::Anthropic => &mut self.anthropic,
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("openai", &self.openai.as_ref().map(|d| d.model_name().to_string()))
            .field(
                "anthropic",
                &self.anthropic.as_ref().map(|d| d.model_name().to_string()),
            )
            .finish()
    }
}
