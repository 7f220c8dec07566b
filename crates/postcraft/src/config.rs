//! Configuration loading.
//!
//! Model names, endpoints and generation settings come from an optional TOML
//! file; API keys come from the environment.
//!
//! ```toml
//! default_provider = "anthropic"
//!
//! [generation]
//! max_tokens = 800
//! temperature = 0.7
//!
//! [openai]
//! model = "gpt-4o"
//!
//! [anthropic]
//! base_url = "https://proxy.internal"
//! ```

use derive_getters::Getters;
use postcraft_core::Provider;
use postcraft_error::{ConfigError, PostcraftResult};
use postcraft_models::{DEFAULT_ANTHROPIC_BASE_URL, DEFAULT_OPENAI_BASE_URL};
use postcraft_suggestions::GenerationSettings;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Endpoint and model for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProviderConfig {
    /// Model identifier
    model: String,
    /// API root
    base_url: String,
}

impl ProviderConfig {
    fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    fn apply(&mut self, overrides: ProviderOverrides) {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PostcraftConfig {
    /// Provider used when a command doesn't name one
    default_provider: Provider,
    /// Token budget and temperature
    generation: GenerationSettings,
    /// Chat completions provider
    openai: ProviderConfig,
    /// Messages provider
    anthropic: ProviderConfig,
}

impl Default for PostcraftConfig {
    fn default() -> Self {
        Self {
            default_provider: Provider::default(),
            generation: GenerationSettings::default(),
            openai: ProviderConfig::new(DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_BASE_URL),
            anthropic: ProviderConfig::new(DEFAULT_ANTHROPIC_MODEL, DEFAULT_ANTHROPIC_BASE_URL),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProviderOverrides {
    model: Option<String>,
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GenerationOverrides {
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_provider: Option<Provider>,
    #[serde(default)]
    generation: GenerationOverrides,
    #[serde(default)]
    openai: ProviderOverrides,
    #[serde(default)]
    anthropic: ProviderOverrides,
}

impl PostcraftConfig {
    /// Load from `path`, or use defaults when no path is given.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> PostcraftResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PostcraftResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e)).with_path(path)
        })?;
        Ok(Self::parse(&content).map_err(|e| e.with_path(path))?)
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> PostcraftResult<Self> {
        Ok(Self::parse(content)?)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let mut config = Self::default();
        if let Some(provider) = file.default_provider {
            config.default_provider = provider;
        }
        if let Some(max_tokens) = file.generation.max_tokens {
            if max_tokens == 0 {
                return Err(
                    ConfigError::new("must be positive").with_setting("generation.max_tokens")
                );
            }
            config.generation.max_tokens = max_tokens;
        }
        if let Some(temperature) = file.generation.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::new(format!(
                    "must be between 0 and 2, got {}",
                    temperature
                ))
                .with_setting("generation.temperature"));
            }
            config.generation.temperature = temperature;
        }
        config.openai.apply(file.openai);
        config.anthropic.apply(file.anthropic);

        Ok(config)
    }

    /// Settings for `provider`.
    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Anthropic => &self.anthropic,
        }
    }
}

/// API keys read from the environment.
///
/// A missing or empty variable leaves that provider unconfigured.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    openai_api_key: Option<String>,
    anthropic_api_key: Option<String>,
}

impl Credentials {
    /// Create credentials from explicit keys.
    pub fn new(openai_api_key: Option<String>, anthropic_api_key: Option<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.filter(|k| !k.trim().is_empty()),
            anthropic_api_key: anthropic_api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Read `OPENAI_API_KEY` and `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("ANTHROPIC_API_KEY").ok(),
        )
    }

    /// The key for `provider`, if set.
    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Anthropic => self.anthropic_api_key.as_deref(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
