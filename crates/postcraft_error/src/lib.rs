//! Error types for the Postcraft suggestion pipeline.
//!
//! Every error records the source location where it was constructed, so log
//! lines point at the call site that gave up rather than at the boundary that
//! absorbed the failure.

mod config;
mod error;
mod json;
mod provider;

pub use config::ConfigError;
pub use error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind};
