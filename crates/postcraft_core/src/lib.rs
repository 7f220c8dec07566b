//! Core data types for the Postcraft suggestion pipeline.
//!
//! This crate provides the request and result types shared by the provider
//! adapters, the suggestion service and the command-line front end.

mod completion;
mod lenient;
mod observability;
mod platform;
mod provider;
mod request;
mod suggestion;
mod trending;

pub use completion::{CompletionRequest, CompletionRequestBuilder};
pub use lenient::Lenient;
pub use observability::{init_observability, shutdown_observability};
pub use platform::Platform;
pub use provider::Provider;
pub use request::{SuggestionRequest, SuggestionRequestBuilder};
pub use suggestion::{
    EmojiSuggestion, HashtagSuggestion, PlatformGuidance, Popularity, SuggestionResult,
};
pub use trending::TrendingHashtag;
