//! OpenAI chat completions integration.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse,
    ChatMessage, ChatResponseFormat,
};
pub(crate) use dto::ApiErrorEnvelope;
