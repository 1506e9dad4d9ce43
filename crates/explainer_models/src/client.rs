//! JSON completion client with authentication fallback.

use crate::{MockResponseGenerator, OpenAiClient};
use explainer_core::{
    ApiCredential, AuthFailurePolicy, CompletionRequest, CompletionResponse, ProviderSettings,
};
use explainer_error::{
    ExplainerResult, ProviderError, ProviderErrorKind, ProviderResult, ResponseError,
    ResponseErrorKind,
};
use explainer_interface::CompletionDriver;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Sends one structured request and parses the reply as JSON.
///
/// Authentication failures (a missing key or a 401/403) are answered by the
/// [`MockResponseGenerator`] under [`AuthFailurePolicy::FallbackToMock`] and
/// surfaced under [`AuthFailurePolicy::Propagate`]. Every other failure is
/// logged and returned unchanged. There is no retry.
pub struct AiClient {
    driver: Box<dyn CompletionDriver>,
    mock: MockResponseGenerator,
    policy: AuthFailurePolicy,
    timeout: Option<Duration>,
    force_mock: bool,
}

impl AiClient {
    /// Wraps a driver with the default fallback policy and no timeout.
    pub fn new(driver: impl CompletionDriver + 'static) -> Self {
        Self {
            driver: Box::new(driver),
            mock: MockResponseGenerator::new(),
            policy: AuthFailurePolicy::default(),
            timeout: None,
            force_mock: false,
        }
    }

    /// OpenAI client configured from settings.
    pub fn from_settings(settings: &ProviderSettings, credential: ApiCredential) -> Self {
        Self::new(OpenAiClient::from_settings(settings, credential))
            .with_auth_failure_policy(settings.on_auth_failure)
            .with_timeout(settings.timeout())
    }

    /// Sets the authentication failure policy.
    pub fn with_auth_failure_policy(mut self, policy: AuthFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bounds each provider call.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Answer every request from the mock generator without calling the driver.
    pub fn with_forced_mock(mut self, force_mock: bool) -> Self {
        self.force_mock = force_mock;
        self
    }

    /// Active authentication failure policy.
    pub fn policy(&self) -> AuthFailurePolicy {
        self.policy
    }

    /// Whether the driver is bypassed.
    pub fn is_offline(&self) -> bool {
        self.force_mock
    }

    /// Driver provider name.
    pub fn provider_name(&self) -> &'static str {
        self.driver.provider_name()
    }

    /// Driver model name.
    pub fn model_name(&self) -> &str {
        self.driver.model_name()
    }

    /// Send the request and return the parsed JSON reply.
    ///
    /// # Errors
    ///
    /// - `ProviderRequest` when the call fails or times out
    /// - `AuthenticationFailed` when the credential is missing or rejected
    ///   and the policy is `Propagate`
    /// - `ResponseEmpty` when the reply has no content
    /// - `MalformedResponse` when the content is not JSON
    #[instrument(
        skip(self, request),
        fields(provider = self.driver.provider_name(), model = self.driver.model_name(), kind = ?request.kind())
    )]
    pub async fn generate_json(&self, request: &CompletionRequest) -> ExplainerResult<Value> {
        if self.force_mock {
            info!("Offline mode, serving mock response");
            return Ok(self.mock.respond(request));
        }

        let response = match self.call_driver(request).await {
            Ok(response) => response,
            Err(e) if e.kind.is_authentication_failure() => match self.policy {
                AuthFailurePolicy::FallbackToMock => {
                    warn!(error = %e.kind, "Authentication failed, falling back to mock data");
                    return Ok(self.mock.respond(request));
                }
                AuthFailurePolicy::Propagate => {
                    error!(error = %e, "Authentication failed");
                    return Err(e.into());
                }
            },
            Err(e) => {
                error!(error = %e, "Provider request failed");
                return Err(e.into());
            }
        };

        Self::parse_content(response)
    }

    async fn call_driver(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.driver.complete(request))
                .await
                .map_err(|_| {
                    ProviderError::new(ProviderErrorKind::Timeout(limit.as_millis() as u64))
                })?,
            None => self.driver.complete(request).await,
        }
    }

    /// Parse reply content as JSON.
    ///
    /// # Errors
    ///
    /// `ResponseEmpty` for absent or empty content, `MalformedResponse` when
    /// it does not parse.
    pub fn parse_content(response: CompletionResponse) -> ExplainerResult<Value> {
        let content = match response.content() {
            Some(content) if !content.is_empty() => content,
            _ => {
                error!("Provider returned no content");
                return Err(ResponseError::new(ResponseErrorKind::Empty).into());
            }
        };

        let value: Value = serde_json::from_str(content).map_err(|e| {
            error!(error = %e, "Provider content is not valid JSON");
            ResponseError::new(ResponseErrorKind::Malformed(e.to_string()))
        })?;

        debug!(bytes = content.len(), "Parsed provider content");
        Ok(value)
    }
}
