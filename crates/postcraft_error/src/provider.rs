//! Provider adapter error types.

/// Conditions under which a provider adapter gives up on a completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[display("Transport failure: {_0}")]
    Transport(String),
    /// The provider answered with a non-success status.
    #[display("HTTP {status} error: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
    /// The provider rejected the credentials (401/403).
    #[display("Authentication rejected: {_0}")]
    Authentication(String),
    /// The response carried no choices or content blocks.
    #[display("Empty response from provider")]
    EmptyResponse,
    /// The response body could not be decoded.
    #[display("Malformed response body: {_0}")]
    MalformedBody(String),
    /// The first content block was not text.
    #[display("Expected a text content block, got '{_0}'")]
    NonTextContent(String),
    /// No client was configured for the requested provider.
    #[display("Provider '{_0}' is not configured")]
    NotConfigured(String),
}

impl ProviderErrorKind {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderErrorKind::Authentication(message),
            _ => ProviderErrorKind::Status { status, message },
        }
    }
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::EmptyResponse);
/// assert!(err.to_string().contains("Empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    line: u32,
    file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ProviderError
where
    T: Into<ProviderErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
