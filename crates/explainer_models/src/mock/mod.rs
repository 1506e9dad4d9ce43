//! Offline stage responder.
//!
//! Produces canned script and blueprint payloads shaped exactly like a
//! provider reply, so the rest of the pipeline runs unchanged without a
//! network or credential.

mod fixtures;

use explainer_core::{CompletionRequest, RequestKind};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

/// Canned topic families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TopicBucket {
    /// User prompt mentions photosynthesis
    Photosynthesis,
    /// Everything else
    NeuralNetworks,
}

impl TopicBucket {
    /// Bucket for a user prompt, case-insensitively.
    pub fn classify(user_prompt: &str) -> Self {
        if user_prompt.to_lowercase().contains("photosynthesis") {
            TopicBucket::Photosynthesis
        } else {
            TopicBucket::NeuralNetworks
        }
    }
}

/// Deterministic stand-in for the provider.
///
/// # Examples
///
/// ```
/// use explainer_core::{CompletionRequest, RequestKind};
/// use explainer_models::MockResponseGenerator;
///
/// let mock = MockResponseGenerator::new();
/// let request = CompletionRequest::json("Any system prompt", "Topic: Photosynthesis")
///     .with_kind(RequestKind::Script);
///
/// let value = mock.respond(&request);
/// assert_eq!(value["scenes"].as_array().map(Vec::len), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockResponseGenerator;

impl MockResponseGenerator {
    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }

    /// Stage guessed from system prompt wording.
    ///
    /// The blueprint check runs first: the blueprint prompt also mentions a
    /// narration script.
    pub fn stage_from_prompt(system_prompt: &str) -> Option<RequestKind> {
        let prompt = system_prompt.to_lowercase();
        if prompt.contains("blueprint") || prompt.contains("visual style") {
            Some(RequestKind::Blueprint)
        } else if prompt.contains("narration script") {
            Some(RequestKind::Script)
        } else {
            None
        }
    }

    /// Stage for a request; an explicit tag wins over prompt wording.
    pub fn classify(&self, request: &CompletionRequest) -> Option<RequestKind> {
        (*request.kind()).or_else(|| Self::stage_from_prompt(request.system_prompt()))
    }

    /// Canned payload for a request, or `{}` when the stage is unknown.
    #[instrument(skip_all, fields(kind = ?request.kind()))]
    pub fn respond(&self, request: &CompletionRequest) -> Value {
        let bucket = TopicBucket::classify(request.user_prompt());

        match self.classify(request) {
            Some(RequestKind::Script) => {
                debug!(%bucket, "Serving mock script");
                fixtures::script(bucket)
            }
            Some(RequestKind::Blueprint) => {
                debug!(%bucket, "Serving mock blueprint");
                fixtures::blueprint(bucket)
            }
            None => {
                let prompt_start: String = request.system_prompt().chars().take(50).collect();
                warn!(prompt_start = %prompt_start, "Mock generator could not identify the stage");
                json!({})
            }
        }
    }
}
