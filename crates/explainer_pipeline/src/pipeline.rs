//! End-to-end run: topic to persisted artifacts.

use crate::{ArtifactStore, BlueprintGenerator, ScriptGenerator, TimingAligner};
use derive_getters::Getters;
use explainer_core::{Blueprint, ExplainerConfig, Script};
use explainer_error::ExplainerResult;
use explainer_models::AiClient;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Artifacts produced by one run and where they were written.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PipelineReport {
    /// Topic the run was started with
    topic: String,
    /// Stage 1 output
    script: Script,
    /// Stage 2 output, as returned by the model
    blueprint: Blueprint,
    /// Stage 2 output with durations aligned to the narration
    render_blueprint: Blueprint,
    /// Location of the script artifact
    script_path: PathBuf,
    /// Location of the blueprint artifact
    blueprint_path: PathBuf,
    /// Location of the render blueprint artifact
    render_blueprint_path: PathBuf,
}

/// Runs the stages in order and persists each artifact.
///
/// # Example
///
/// ```no_run
/// use explainer_core::{ApiCredential, ExplainerConfig};
/// use explainer_models::AiClient;
/// use explainer_pipeline::Pipeline;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExplainerConfig::load()?;
/// let client = AiClient::from_settings(&config.provider, ApiCredential::Unconfigured);
///
/// let report = Pipeline::new(client, &config).run("How DNS Works").await?;
/// println!("{} scenes", report.script().len());
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    client: AiClient,
    store: ArtifactStore,
    aligner: TimingAligner,
    enforce_alignment: bool,
}

impl Pipeline {
    /// Creates a pipeline from a client and the loaded configuration.
    pub fn new(client: AiClient, config: &ExplainerConfig) -> Self {
        Self {
            client,
            store: ArtifactStore::new(config.output.clone()),
            aligner: TimingAligner::new(config.timing.clone()),
            enforce_alignment: config.pipeline.enforce_scene_alignment,
        }
    }

    /// The client used for both stages.
    pub fn client(&self) -> &AiClient {
        &self.client
    }

    /// The artifact store.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Run every stage for `topic`.
    ///
    /// Stops at the first failure. Artifacts from stages that completed
    /// before the failure stay on disk.
    #[instrument(skip(self), fields(offline = self.client.is_offline()))]
    pub async fn run(&self, topic: &str) -> ExplainerResult<PipelineReport> {
        info!("Starting explainer synthesis");

        info!(stage = 1, "Generating script");
        let script = ScriptGenerator::new(&self.client).generate(topic).await?;
        let script_path = self.store.write_script(&script).await?;

        info!(stage = 2, "Generating blueprint");
        let blueprint = BlueprintGenerator::new(&self.client)
            .with_alignment(self.enforce_alignment)
            .generate(&script)
            .await?;
        let blueprint_path = self.store.write_blueprint(&blueprint).await?;

        info!(stage = 3, "Aligning scene timing");
        let render_blueprint = self.aligner.align(&script, &blueprint);
        let render_blueprint_path = self.store.write_render_blueprint(&render_blueprint).await?;

        info!(
            render_blueprint = %render_blueprint_path.display(),
            "Video rendering is handled externally"
        );

        Ok(PipelineReport {
            topic: topic.to_string(),
            script,
            blueprint,
            render_blueprint,
            script_path,
            blueprint_path,
            render_blueprint_path,
        })
    }
}
