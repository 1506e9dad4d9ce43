//! Pipeline command handler.

use crate::cli::Cli;
use explainer::{
    AiClient, ApiCredential, ExplainerConfig, ExplainerResult, Pipeline, PipelineReport,
};
use tracing::{info, instrument, warn};

/// Load configuration, build the client and run every stage for the CLI topic.
#[instrument(skip(cli), fields(topic = %cli.topic, offline = cli.offline))]
pub async fn run_pipeline(cli: &Cli) -> ExplainerResult<PipelineReport> {
    let mut config = ExplainerConfig::load_with(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    let credential = ApiCredential::from_env(&config.provider.api_key_env);
    let key_set = credential.is_configured();

    let client =
        AiClient::from_settings(&config.provider, credential).with_forced_mock(cli.offline);
    if !key_set && !client.is_offline() {
        warn!(
            var = %config.provider.api_key_env,
            policy = %client.policy(),
            "API key not set"
        );
    }

    let pipeline = Pipeline::new(client, &config);
    info!(
        provider = pipeline.client().provider_name(),
        model = pipeline.client().model_name(),
        output = %pipeline.store().directory().display(),
        "Configured"
    );

    pipeline.run(&cli.topic).await
}
