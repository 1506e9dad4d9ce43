//! Provider credential.

/// API key state for the LLM provider.
///
/// A missing key is an explicit state rather than an empty string, so the
/// client can branch on it.
///
/// # Examples
///
/// ```
/// use explainer_core::ApiCredential;
///
/// assert!(ApiCredential::new("sk-test").is_configured());
/// assert_eq!(ApiCredential::new("   "), ApiCredential::Unconfigured);
/// assert_eq!(format!("{:?}", ApiCredential::new("sk-test")), "Configured(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub enum ApiCredential {
    /// A non-empty secret
    Configured(String),
    /// No secret available
    #[default]
    Unconfigured,
}

impl ApiCredential {
    /// Wrap a secret. Blank secrets are treated as absent.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if secret.trim().is_empty() {
            ApiCredential::Unconfigured
        } else {
            ApiCredential::Configured(secret)
        }
    }

    /// Read the secret from an environment variable.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(secret) => Self::new(secret),
            Err(_) => ApiCredential::Unconfigured,
        }
    }

    /// The secret, when configured.
    pub fn secret(&self) -> Option<&str> {
        match self {
            ApiCredential::Configured(secret) => Some(secret),
            ApiCredential::Unconfigured => None,
        }
    }

    /// True when a secret is present.
    pub fn is_configured(&self) -> bool {
        matches!(self, ApiCredential::Configured(_))
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiCredential::Configured(_) => write!(f, "Configured(<redacted>)"),
            ApiCredential::Unconfigured => write!(f, "Unconfigured"),
        }
    }
}
