//! Crate-level error aggregation.

use crate::{ConfigError, JsonError, ProviderError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PostcraftErrorKind {
    /// JSON decoding error
    Json(JsonError),
    /// Provider adapter error
    Provider(ProviderError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for PostcraftErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostcraftErrorKind::Json(e) => write!(f, "{}", e),
            PostcraftErrorKind::Provider(e) => write!(f, "{}", e),
            PostcraftErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Postcraft error with kind discrimination.
#[derive(Debug)]
pub struct PostcraftError(Box<PostcraftErrorKind>);

impl PostcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PostcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostcraftErrorKind {
        &self.0
    }
}

impl std::fmt::Display for PostcraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Postcraft Error: {}", self.0)
    }
}

impl std::error::Error for PostcraftError {}

impl<T> From<T> for PostcraftError
where
    T: Into<PostcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postcraft operations.
pub type PostcraftResult<T> = std::result::Result<T, PostcraftError>;
