//! LLM provider error types.

/// Provider-side failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// No credential was configured, so the request could not be authenticated
    #[display("No API credential configured")]
    MissingCredential,
    /// Provider rejected the credential
    #[display("Authentication rejected (HTTP {}): {}", status, message)]
    Unauthorized {
        /// HTTP status code (401 or 403)
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Provider throttled the request
    #[display("Rate limit exceeded: {}", _0)]
    RateLimited(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
    /// Request never produced an HTTP response
    #[display("Request failed: {}", _0)]
    Network(String),
    /// No response arrived within the configured timeout (milliseconds)
    #[display("Request timed out after {}ms", _0)]
    Timeout(u64),
    /// The response envelope could not be decoded
    #[display("Failed to decode provider response: {}", _0)]
    Decode(String),
}

impl ProviderErrorKind {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ProviderErrorKind::Unauthorized { status, message },
            429 => ProviderErrorKind::RateLimited(message),
            _ => ProviderErrorKind::Http { status, message },
        }
    }

    /// True when the failure means the credential is missing or was rejected.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            ProviderErrorKind::MissingCredential | ProviderErrorKind::Unauthorized { .. }
        )
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use explainer_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::from_status(401, "invalid key"));
/// assert!(err.kind.is_authentication_failure());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for provider driver calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
