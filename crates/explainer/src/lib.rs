//! Explainer - topic to animation blueprint
//!
//! Explainer turns a topic into the two artifacts a 2D technical explainer
//! video is rendered from: a scene-by-scene narration script and a visual
//! animation blueprint. Each stage is a single structured request to an
//! OpenAI-compatible chat completions API. When no API key is available, or
//! the provider rejects it, canned mock data keeps the pipeline running.
//!
//! # Quick Start
//!
//! ```no_run
//! use explainer::{AiClient, ApiCredential, ExplainerConfig, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExplainerConfig::load()?;
//!     let credential = ApiCredential::from_env(&config.provider.api_key_env);
//!     let client = AiClient::from_settings(&config.provider, credential);
//!
//!     let report = Pipeline::new(client, &config).run("How Web Sockets Work").await?;
//!     println!("Blueprint saved to {}", report.blueprint_path().display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `explainer_error` - Error types and exit code categories
//! - `explainer_core` - Artifacts, style profile, request types, configuration
//! - `explainer_interface` - `CompletionDriver` trait
//! - `explainer_models` - OpenAI client, mock generator, JSON client
//! - `explainer_pipeline` - Stages, validation, timing, artifact output
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use observability::{ObservabilityConfig, init_observability_with_config};

pub use explainer_error::{
    ConfigError, ErrorCategory, ExplainerError, ExplainerErrorKind, ExplainerResult, JsonError,
    ProviderError, ProviderErrorKind, ProviderResult, ResponseError, ResponseErrorKind,
    SchemaError, SchemaErrorKind, StorageError, StorageErrorKind, USAGE_EXIT_CODE,
};

pub use explainer_core::{
    ApiCredential, AuthFailurePolicy, Blueprint, BlueprintScene, BlueprintSceneBuilder,
    CompletionRequest, CompletionResponse, ExplainerConfig,
    FIXED_STYLE_PROFILE, Message, OutputSettings, PipelineSettings, ProviderSettings,
    RequestKind, ResponseFormat, Role, Script, ScriptScene, StyleProfile, TimingSettings,
};

pub use explainer_interface::CompletionDriver;

pub use explainer_models::{AiClient, MockResponseGenerator, OpenAiClient, TopicBucket};

pub use explainer_pipeline::{
    ArtifactStore, BlueprintGenerator, Pipeline, PipelineReport, SCRIPT_SYSTEM_PROMPT,
    ScriptGenerator, TimingAligner, blueprint_system_prompt, check_alignment,
    validate_blueprint, validate_script,
};
