//! Message types for completion requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// # Examples
///
/// ```
/// use explainer_core::{Message, Role};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .content("Topic: DNS")
///     .build()
///     .unwrap();
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Topic: DNS");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// Message text
    content: String,
}

impl Message {
    /// Creates a new builder for `Message`.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Create a message directly.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// User message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
