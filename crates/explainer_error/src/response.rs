//! Errors raised while turning provider text into JSON.

use crate::ErrorCategory;

/// Specific response decoding conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResponseErrorKind {
    /// Provider returned no textual content
    #[display("No content received from provider")]
    Empty,
    /// Content was not valid JSON
    #[display("Response content is not valid JSON: {}", _0)]
    Malformed(String),
}

impl ResponseErrorKind {
    pub(crate) fn category(&self) -> ErrorCategory {
        match self {
            ResponseErrorKind::Empty => ErrorCategory::ResponseEmpty,
            ResponseErrorKind::Malformed(_) => ErrorCategory::MalformedResponse,
        }
    }
}

/// Response error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Response Error: {} at line {} in {}", kind, line, file)]
pub struct ResponseError {
    /// The specific error condition
    pub kind: ResponseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ResponseError {
    /// Create a new ResponseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResponseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
