//! Error categories and their exit codes.

/// Exit code for a rejected command line (sysexits `EX_USAGE`).
pub const USAGE_EXIT_CODE: u8 = 64;

/// Coarse classification of a pipeline failure.
///
/// Each category owns a distinct, stable process exit code so that callers of
/// the binary can tell failures apart without parsing log output.
///
/// # Examples
///
/// ```
/// use explainer_error::ErrorCategory;
///
/// assert_eq!(ErrorCategory::ProviderRequest.exit_code(), 3);
/// assert_eq!(ErrorCategory::InvalidBlueprintFormat.to_string(), "invalid blueprint format");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ErrorCategory {
    /// Configuration could not be loaded or was invalid
    #[display("configuration")]
    Config,
    /// Provider call failed for a reason other than authentication
    #[display("provider request")]
    ProviderRequest,
    /// Provider rejected the credential and the policy is to propagate
    #[display("authentication failed")]
    AuthenticationFailed,
    /// Provider returned no textual content
    #[display("response empty")]
    ResponseEmpty,
    /// Provider content was not valid JSON
    #[display("malformed response")]
    MalformedResponse,
    /// Script stage output violated the script contract
    #[display("invalid script format")]
    InvalidScriptFormat,
    /// Blueprint stage output violated the blueprint contract
    #[display("invalid blueprint format")]
    InvalidBlueprintFormat,
    /// Artifact could not be written
    #[display("storage")]
    Storage,
    /// Value could not be serialized
    #[display("serialization")]
    Serialization,
}

impl ErrorCategory {
    /// All categories, in exit code order.
    pub const ALL: [ErrorCategory; 9] = [
        ErrorCategory::Config,
        ErrorCategory::ProviderRequest,
        ErrorCategory::AuthenticationFailed,
        ErrorCategory::ResponseEmpty,
        ErrorCategory::MalformedResponse,
        ErrorCategory::InvalidScriptFormat,
        ErrorCategory::InvalidBlueprintFormat,
        ErrorCategory::Storage,
        ErrorCategory::Serialization,
    ];

    /// Process exit code.
    ///
    /// Zero means success and [`USAGE_EXIT_CODE`] means the command line was
    /// rejected; no category uses either. A panic exits with 101.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCategory::Config => 2,
            ErrorCategory::ProviderRequest => 3,
            ErrorCategory::AuthenticationFailed => 4,
            ErrorCategory::ResponseEmpty => 5,
            ErrorCategory::MalformedResponse => 6,
            ErrorCategory::InvalidScriptFormat => 7,
            ErrorCategory::InvalidBlueprintFormat => 8,
            ErrorCategory::Storage => 9,
            ErrorCategory::Serialization => 10,
        }
    }
}
