//! AI emoji and hashtag suggestions for social media posts.
//!
//! This crate ties the workspace together: it loads configuration, wires the
//! provider clients into a [`SuggestionService`] and exposes the command-line
//! handlers used by the `postcraft` binary.

pub mod cli;
mod config;
mod wiring;

pub use config::{Credentials, PostcraftConfig, ProviderConfig};
pub use wiring::{build_registry, build_service};

pub use postcraft_core::{
    EmojiSuggestion, HashtagSuggestion, Lenient, Platform, PlatformGuidance, Popularity, Provider,
    SuggestionRequest, SuggestionResult, TrendingHashtag,
};
pub use postcraft_interface::CompletionDriver;
pub use postcraft_error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use postcraft_suggestions::{GenerationSettings, ProviderRegistry, SuggestionService};
