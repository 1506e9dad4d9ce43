//! Trait definitions for LLM backends.

use async_trait::async_trait;
use explainer_core::{CompletionRequest, CompletionResponse};
use explainer_error::ProviderResult;

/// Core trait that all completion backends must implement.
///
/// Implementations perform exactly one provider round-trip per call and never
/// retry. Authentication failures must be reported as
/// [`explainer_error::ProviderErrorKind::Unauthorized`] or
/// [`explainer_error::ProviderErrorKind::MissingCredential`] so the caller can
/// apply its fallback policy.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send a completion request and return the raw response text.
    async fn complete(&self, req: &CompletionRequest) -> ProviderResult<CompletionResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when the request carries no override.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: CompletionDriver + ?Sized> CompletionDriver for Box<D> {
    async fn complete(&self, req: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
