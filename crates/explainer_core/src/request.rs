//! Request and response types for structured completions.

use crate::{Message, RequestKind, Role};
use serde::{Deserialize, Serialize};

/// Output format requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    Text,
    /// A single JSON object
    #[default]
    JsonObject,
}

/// Provider-agnostic completion request.
///
/// # Examples
///
/// ```
/// use explainer_core::{CompletionRequest, RequestKind, ResponseFormat};
///
/// let request = CompletionRequest::json("You write narration scripts.", "Topic: TCP")
///     .with_kind(RequestKind::Script);
///
/// assert_eq!(request.system_prompt(), "You write narration scripts.");
/// assert_eq!(request.user_prompt(), "Topic: TCP");
/// assert_eq!(*request.response_format(), ResponseFormat::JsonObject);
/// assert_eq!(*request.kind(), Some(RequestKind::Script));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Requested output format
    response_format: ResponseFormat,
    /// Model override; the driver's configured model is used when absent
    model: Option<String>,
    /// Stage that issued this request
    kind: Option<RequestKind>,
}

impl CompletionRequest {
    /// A request over arbitrary messages.
    pub fn new(messages: Vec<Message>, response_format: ResponseFormat) -> Self {
        Self {
            messages,
            response_format,
            model: None,
            kind: None,
        }
    }

    /// A JSON-object request made of one system and one user message.
    pub fn json(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self::new(
            vec![Message::system(system_prompt), Message::user(user_prompt)],
            ResponseFormat::JsonObject,
        )
    }

    /// Send to `model` instead of the driver's configured model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Tag the request with the stage that issued it.
    pub fn with_kind(mut self, kind: RequestKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Content of the first system message, or `""`.
    pub fn system_prompt(&self) -> &str {
        self.first_content(Role::System)
    }

    /// Content of the first user message, or `""`.
    pub fn user_prompt(&self) -> &str {
        self.first_content(Role::User)
    }

    fn first_content(&self, role: Role) -> &str {
        self.messages
            .iter()
            .find(|m| *m.role() == role)
            .map(|m| m.content().as_str())
            .unwrap_or_default()
    }
}

/// Provider-agnostic completion response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionResponse {
    /// Text of the first choice, if the provider returned any
    content: Option<String>,
}

impl CompletionResponse {
    /// Response carrying text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Response with no textual content.
    pub fn empty() -> Self {
        Self { content: None }
    }
}
