//! Configuration structures for the pipeline.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from explainer.toml)
//! - User overrides (~/.config/explainer/explainer.toml, then ./explainer.toml)
//! - An explicit file passed by the caller
//! - `EXPLAINER_<SECTION>__<KEY>` environment variables, highest precedence
//!
//! Secrets are not part of the configuration; see [`crate::ApiCredential`].

use config::{Config, Environment, File, FileFormat};
use explainer_error::{ConfigError, ExplainerError, ExplainerResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../explainer.toml");

/// What to do when the provider rejects (or never receives) a credential.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthFailurePolicy {
    /// Answer from the offline mock generator
    #[default]
    FallbackToMock,
    /// Surface the failure to the caller
    Propagate,
}

/// LLM provider settings.
///
/// # Example
///
/// ```toml
/// [provider]
/// model = "gpt-4-turbo-preview"
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// on_auth_failure = "fallback_to_mock"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Behavior on authentication failure
    pub on_auth_failure: AuthFailurePolicy,
    /// Per-request timeout; `None` waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo-preview".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            on_auth_failure: AuthFailurePolicy::FallbackToMock,
            timeout_secs: None,
        }
    }
}

impl ProviderSettings {
    /// Timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Stage coupling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Require one blueprint scene per script scene, in the same order
    pub enforce_scene_alignment: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            enforce_scene_alignment: true,
        }
    }
}

/// Narration timing estimates used to stretch blueprint durations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Speaking rate used to estimate narration length
    pub words_per_second: f64,
    /// Floor for any estimated narration length
    pub min_scene_seconds: f64,
    /// Seconds added to the estimate to leave room for transitions
    pub transition_padding: f64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            words_per_second: 2.5,
            min_scene_seconds: 2.0,
            transition_padding: 1.0,
        }
    }
}

/// Where artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output directory, created when missing
    pub directory: PathBuf,
    /// Stage 1 artifact file name
    pub script_file: String,
    /// Stage 2 artifact file name
    pub blueprint_file: String,
    /// Timing-aligned blueprint file name
    pub render_blueprint_file: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            script_file: "output_script.json".to_string(),
            blueprint_file: "output_blueprint.json".to_string(),
            render_blueprint_file: "render_blueprint.json".to_string(),
        }
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use explainer_core::ExplainerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExplainerConfig::load()?;
/// println!("Model: {}", config.provider.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ExplainerConfig {
    /// LLM provider settings
    pub provider: ProviderSettings,
    /// Stage coupling settings
    pub pipeline: PipelineSettings,
    /// Timing alignment settings
    pub timing: TimingSettings,
    /// Artifact output settings
    pub output: OutputSettings,
}

impl ExplainerConfig {
    /// Load configuration from a specific file path only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ExplainerResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ExplainerResult<Self> {
        Self::load_with(None)
    }

    /// Like [`ExplainerConfig::load`], with an explicit (required) file layered
    /// above the user files and below the environment.
    #[instrument(skip(explicit), fields(explicit = ?explicit.map(Path::display)))]
    pub fn load_with(explicit: Option<&Path>) -> ExplainerResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("explainer/explainer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("explainer").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("EXPLAINER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Bundled defaults only, without user files or environment overrides.
    pub fn bundled() -> ExplainerResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending key.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::new("provider.model must not be empty").into());
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::new("provider.base_url must not be empty").into());
        }
        if self.provider.timeout_secs == Some(0) {
            return Err(ConfigError::new("provider.timeout_secs must be positive").into());
        }
        if !(self.timing.words_per_second.is_finite() && self.timing.words_per_second > 0.0) {
            return Err(ConfigError::new(format!(
                "timing.words_per_second must be positive, got {}",
                self.timing.words_per_second
            ))
            .into());
        }
        if !(self.timing.min_scene_seconds.is_finite() && self.timing.min_scene_seconds >= 0.0) {
            return Err(ConfigError::new(format!(
                "timing.min_scene_seconds must be non-negative, got {}",
                self.timing.min_scene_seconds
            ))
            .into());
        }
        if !(self.timing.transition_padding.is_finite() && self.timing.transition_padding >= 0.0)
        {
            return Err(ConfigError::new(format!(
                "timing.transition_padding must be non-negative, got {}",
                self.timing.transition_padding
            ))
            .into());
        }
        for (key, name) in [
            ("output.script_file", &self.output.script_file),
            ("output.blueprint_file", &self.output.blueprint_file),
            ("output.render_blueprint_file", &self.output.render_blueprint_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::new(format!("{} must not be empty", key)).into());
            }
        }
        Ok(())
    }
}
