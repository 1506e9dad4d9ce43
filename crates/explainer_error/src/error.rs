//! Top-level error wrapper types.

use crate::{
    ConfigError, ErrorCategory, JsonError, ProviderError, ResponseError, SchemaError,
    StorageError,
};

/// Every error condition the pipeline can surface.
///
/// # Examples
///
/// ```
/// use explainer_error::{ExplainerError, ConfigError};
///
/// let err: ExplainerError = ConfigError::new("Missing field").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ExplainerErrorKind {
    /// LLM provider call failed
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Provider answered without usable JSON text
    #[from(ResponseError)]
    Response(ResponseError),
    /// JSON parsed but did not match the stage contract
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Artifact persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Explainer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use explainer_error::{ExplainerResult, SchemaError, SchemaErrorKind};
///
/// fn might_fail() -> ExplainerResult<()> {
///     Err(SchemaError::new(SchemaErrorKind::InvalidScriptFormat(
///         "missing `scenes`".to_string(),
///     )))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Explainer Error: {}", _0)]
pub struct ExplainerError(Box<ExplainerErrorKind>);

impl ExplainerError {
    /// Create a new error from a kind.
    pub fn new(kind: ExplainerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExplainerErrorKind {
        &self.0
    }

    /// Classify this error into one of the reportable categories.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ExplainerErrorKind::Provider(e) if e.kind.is_authentication_failure() => {
                ErrorCategory::AuthenticationFailed
            }
            ExplainerErrorKind::Provider(_) => ErrorCategory::ProviderRequest,
            ExplainerErrorKind::Response(e) => e.kind.category(),
            ExplainerErrorKind::Schema(e) => e.kind.category(),
            ExplainerErrorKind::Config(_) => ErrorCategory::Config,
            ExplainerErrorKind::Storage(_) => ErrorCategory::Storage,
            ExplainerErrorKind::Json(_) => ErrorCategory::Serialization,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }
}

// Generic From implementation for any type that converts to ExplainerErrorKind
impl<T> From<T> for ExplainerError
where
    T: Into<ExplainerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Explainer operations.
pub type ExplainerResult<T> = std::result::Result<T, ExplainerError>;
