//! Stage contract violations.

use crate::ErrorCategory;

/// Which stage contract was violated and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SchemaErrorKind {
    /// Script response lacked a valid `scenes` array
    #[display("Invalid script format: {}", _0)]
    InvalidScriptFormat(String),
    /// Blueprint response lacked a valid `blueprint` array
    #[display("Invalid blueprint format: {}", _0)]
    InvalidBlueprintFormat(String),
}

impl SchemaErrorKind {
    pub(crate) fn category(&self) -> ErrorCategory {
        match self {
            SchemaErrorKind::InvalidScriptFormat(_) => ErrorCategory::InvalidScriptFormat,
            SchemaErrorKind::InvalidBlueprintFormat(_) => ErrorCategory::InvalidBlueprintFormat,
        }
    }
}

/// Schema error with location tracking.
///
/// # Examples
///
/// ```
/// use explainer_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::InvalidBlueprintFormat(
///     "scene 2: `transition` must be a string".to_string(),
/// ));
/// assert!(format!("{}", err).contains("transition"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The specific error condition
    pub kind: SchemaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a script contract violation.
    #[track_caller]
    pub fn script(reason: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::InvalidScriptFormat(reason.into()))
    }

    /// Shorthand for a blueprint contract violation.
    #[track_caller]
    pub fn blueprint(reason: impl Into<String>) -> Self {
        Self::new(SchemaErrorKind::InvalidBlueprintFormat(reason.into()))
    }
}
