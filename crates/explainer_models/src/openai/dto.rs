//! OpenAI chat completions data transfer objects.

use derive_getters::Getters;
use explainer_core::{Message, ResponseFormat, Role};
use serde::{Deserialize, Serialize};

/// Chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: Role,
    /// Message content
    #[serde(default)]
    content: Option<String>,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: *message.role(),
            content: Some(message.content().clone()),
        }
    }
}

/// `response_format` object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatResponseFormat {
    /// `"json_object"` or `"text"`
    #[serde(rename = "type")]
    format_type: String,
}

impl From<ResponseFormat> for ChatResponseFormat {
    fn from(format: ResponseFormat) -> Self {
        let format_type = match format {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        };
        Self {
            format_type: format_type.to_string(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation
    messages: Vec<ChatMessage>,
    /// Requested output format
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ChatResponseFormat>,
}

impl ChatCompletionRequest {
    /// Create a request body directly.
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
        response_format: Option<ChatResponseFormat>,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            response_format,
        }
    }
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Generated message
    message: ChatMessage,
}

/// Response body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion alternatives; only the first is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) message: String,
}
