//! Stage 1: topic to narration script.

use crate::prompts::{SCRIPT_SYSTEM_PROMPT, script_user_prompt};
use crate::validation::validate_script;
use explainer_core::{CompletionRequest, RequestKind, Script};
use explainer_error::ExplainerResult;
use explainer_models::AiClient;
use tracing::{error, info, instrument};

/// Generates a validated narration script for a topic.
pub struct ScriptGenerator<'a> {
    client: &'a AiClient,
}

impl<'a> ScriptGenerator<'a> {
    /// Creates a generator backed by `client`.
    pub fn new(client: &'a AiClient) -> Self {
        Self { client }
    }

    /// The request sent for `topic`.
    pub fn request(topic: &str) -> CompletionRequest {
        CompletionRequest::json(SCRIPT_SYSTEM_PROMPT, script_user_prompt(topic))
            .with_kind(RequestKind::Script)
    }

    /// Ask the model for a script and validate it.
    ///
    /// Any string is accepted as a topic. Failures are logged and returned
    /// unchanged.
    #[instrument(skip(self))]
    pub async fn generate(&self, topic: &str) -> ExplainerResult<Script> {
        info!("Generating script");

        let value = self
            .client
            .generate_json(&Self::request(topic))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to generate script"))?;

        let script = validate_script(&value)
            .inspect_err(|e| error!(error = %e, "Failed to generate script"))?;

        info!(scenes = script.len(), "Generated script");
        Ok(script)
    }
}
