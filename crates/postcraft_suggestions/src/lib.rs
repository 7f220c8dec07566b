//! Emoji and hashtag suggestion pipeline.
//!
//! [`SuggestionService`] asks a hosted model for suggestions and always
//! answers: when the provider call fails or its output cannot be parsed, the
//! deterministic tables in the `fallback` module are used instead.
//!
//! # Example
//!
//! ```no_run
//! use postcraft_suggestions::{ProviderRegistry, SuggestionService};
//! use postcraft_core::{Platform, Provider, SuggestionRequest};
//!
//! # async fn run() {
//! let service = SuggestionService::new(ProviderRegistry::new());
//! let request = SuggestionRequest::builder()
//!     .content("Check out our new product!")
//!     .platform(Platform::Linkedin)
//!     .provider(Provider::Anthropic)
//!     .build()
//!     .unwrap();
//!
//! // No provider is registered, so this is the fallback result.
//! let result = service.generate(&request).await;
//! assert_eq!(result.emojis().len(), 1);
//! # }
//! ```

pub mod fallback;
mod metrics;
pub mod prompt;
mod registry;
mod service;
pub mod validator;

pub use fallback::{fallback, fallback_trending, platform_guidance};
pub use prompt::{PromptParts, build_prompt, build_trending_prompt};
pub use registry::ProviderRegistry;
pub use service::{GenerationSettings, SuggestionService};
pub use validator::{parse_trending, validate};
