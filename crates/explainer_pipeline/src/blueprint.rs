//! Stage 2: narration script to animation blueprint.

use crate::prompts::{blueprint_system_prompt, blueprint_user_prompt};
use crate::validation::{check_alignment, validate_blueprint};
use explainer_core::{
    Blueprint, CompletionRequest, FIXED_STYLE_PROFILE, RequestKind, Script, StyleProfile,
};
use explainer_error::ExplainerResult;
use explainer_models::AiClient;
use tracing::{debug, error, info, instrument};

/// Generates a validated animation blueprint for a script.
pub struct BlueprintGenerator<'a> {
    client: &'a AiClient,
    profile: &'a StyleProfile,
    enforce_alignment: bool,
}

impl<'a> BlueprintGenerator<'a> {
    /// Creates a generator using the fixed style profile with alignment enforced.
    pub fn new(client: &'a AiClient) -> Self {
        Self {
            client,
            profile: &FIXED_STYLE_PROFILE,
            enforce_alignment: true,
        }
    }

    /// Require one blueprint scene per script scene.
    pub fn with_alignment(mut self, enforce: bool) -> Self {
        self.enforce_alignment = enforce;
        self
    }

    /// The request sent for `script`.
    pub fn request(&self, script: &Script) -> ExplainerResult<CompletionRequest> {
        Ok(CompletionRequest::json(
            blueprint_system_prompt(self.profile)?,
            blueprint_user_prompt(script)?,
        )
        .with_kind(RequestKind::Blueprint))
    }

    /// Ask the model for a blueprint and validate it against the script.
    #[instrument(
        skip(self, script),
        fields(script_scenes = script.len(), enforce_alignment = self.enforce_alignment)
    )]
    pub async fn generate(&self, script: &Script) -> ExplainerResult<Blueprint> {
        info!("Generating animation blueprint");

        let value = self
            .client
            .generate_json(&self.request(script)?)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to generate blueprint"))?;
        debug!(response = %value, "Blueprint response");

        let blueprint = validate_blueprint(&value)
            .inspect_err(|e| error!(error = %e, "Failed to generate blueprint"))?;

        if self.enforce_alignment {
            check_alignment(script, &blueprint)
                .inspect_err(|e| error!(error = %e, "Blueprint does not match script"))?;
        }

        info!(
            scenes = blueprint.len(),
            total_seconds = blueprint.total_duration_seconds(),
            "Generated blueprint"
        );
        Ok(blueprint)
    }
}
