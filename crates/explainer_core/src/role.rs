//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Chat message roles understood by completion providers.
///
/// # Examples
///
/// ```
/// use explainer_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Task description and output contract
    #[display("system")]
    System,
    /// Stage input
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}
