//! OpenAI chat completions client.

use crate::openai::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use explainer_core::{
    ApiCredential, CompletionRequest, CompletionResponse, ProviderSettings, ResponseFormat,
};
use explainer_error::{ProviderError, ProviderErrorKind, ProviderResult};
use explainer_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat completions client.
///
/// Performs one HTTP round-trip per call. A missing credential is reported as
/// [`ProviderErrorKind::MissingCredential`] without touching the network.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    credential: ApiCredential,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a client for the public OpenAI endpoint.
    pub fn new(credential: ApiCredential, model: impl Into<String>) -> Self {
        Self::with_base_url(credential, model, DEFAULT_BASE_URL)
    }

    /// Creates a client for any OpenAI-compatible endpoint.
    pub fn with_base_url(
        credential: ApiCredential,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            credential,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Creates a client from provider settings.
    pub fn from_settings(settings: &ProviderSettings, credential: ApiCredential) -> Self {
        Self::with_base_url(credential, settings.model.clone(), settings.base_url.clone())
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Wire body for a request; the request's model override wins.
    pub fn to_chat_request(&self, req: &CompletionRequest) -> ChatCompletionRequest {
        let response_format = match req.response_format() {
            ResponseFormat::JsonObject => Some((*req.response_format()).into()),
            ResponseFormat::Text => None,
        };

        ChatCompletionRequest::new(
            req.model().clone().unwrap_or_else(|| self.model.clone()),
            req.messages().iter().map(ChatMessage::from).collect(),
            response_format,
        )
    }
}

/// Prefer the provider's `error.message` over the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model, kind = ?req.kind()))]
    async fn complete(&self, req: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        let Some(secret) = self.credential.secret() else {
            warn!("No API key configured, request not sent");
            return Err(ProviderError::new(ProviderErrorKind::MissingCredential));
        };

        let body = self.to_chat_request(req);
        let url = self.endpoint();
        debug!(url = %url, messages = body.messages().len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let kind = ProviderErrorKind::from_status(status.as_u16(), error_message(&text));
            warn!(status = status.as_u16(), error = %kind, "Provider returned an error status");
            return Err(ProviderError::new(kind));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Decode(e.to_string())))?;

        debug!(choices = parsed.choices().len(), "Received chat completion");

        Ok(match parsed.first_content() {
            Some(content) => CompletionResponse::text(content),
            None => CompletionResponse::empty(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explainer_core::RequestKind;

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client =
            OpenAiClient::with_base_url(ApiCredential::Unconfigured, "m", "http://localhost:8080/v1/");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn wire_body_uses_json_object_format() -> Result<(), serde_json::Error> {
        let client = OpenAiClient::new(ApiCredential::Unconfigured, "gpt-4-turbo-preview");
        let req = CompletionRequest::json("sys", "Topic: DNS").with_kind(RequestKind::Script);

        let value = serde_json::to_value(client.to_chat_request(&req))?;
        assert_eq!(value["model"], "gpt-4-turbo-preview");
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Topic: DNS");
        Ok(())
    }

    #[test]
    fn request_model_overrides_client_model() -> Result<(), serde_json::Error> {
        let client = OpenAiClient::new(ApiCredential::Unconfigured, "gpt-4-turbo-preview");
        let req = CompletionRequest::json("sys", "Topic: DNS").with_model("gpt-4o-mini");

        let value = serde_json::to_value(client.to_chat_request(&req))?;
        assert_eq!(value["model"], "gpt-4o-mini");
        Ok(())
    }

    #[test]
    fn provider_error_message_is_extracted() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Incorrect API key provided");
        assert_eq!(error_message("gateway down"), "gateway down");
    }
}
