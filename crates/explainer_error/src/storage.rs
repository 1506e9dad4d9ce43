//! Artifact storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the output directory
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an artifact file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use explainer_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileWrite("out/output_script.json".to_string()));
/// assert!(format!("{}", err).contains("output_script.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The specific error condition
    pub kind: StorageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
