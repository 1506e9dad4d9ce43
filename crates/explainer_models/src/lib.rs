//! LLM provider integration for Explainer.
//!
//! This crate provides:
//! - [`OpenAiClient`], a [`CompletionDriver`](explainer_interface::CompletionDriver)
//!   for OpenAI-compatible chat completion endpoints
//! - [`MockResponseGenerator`], deterministic canned stage output used when
//!   the provider is unreachable by credential or explicitly bypassed
//! - [`AiClient`], which turns one driver call into a parsed JSON value and
//!   applies the authentication fallback policy
//!
//! # Example
//!
//! ```no_run
//! use explainer_core::{ApiCredential, CompletionRequest, ProviderSettings};
//! use explainer_models::AiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ProviderSettings::default();
//! let client = AiClient::from_settings(&settings, ApiCredential::from_env("OPENAI_API_KEY"));
//!
//! let request = CompletionRequest::json("You write narration scripts.", "Topic: DNS");
//! let value = client.generate_json(&request).await?;
//! println!("{value}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod mock;
mod openai;

pub use client::AiClient;
pub use mock::{MockResponseGenerator, TopicBucket};
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse,
    ChatMessage, ChatResponseFormat, OpenAiClient,
};
