//! Artifact persistence.

use explainer_core::{Blueprint, OutputSettings, Script};
use explainer_error::{ExplainerResult, JsonError, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Writes stage artifacts as pretty-printed JSON into the output directory.
///
/// The directory is created on first write. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    settings: OutputSettings,
}

impl ArtifactStore {
    /// Creates a store for the given output settings.
    pub fn new(settings: OutputSettings) -> Self {
        Self { settings }
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.settings.directory
    }

    /// Path the script artifact is written to.
    pub fn script_path(&self) -> PathBuf {
        self.settings.directory.join(&self.settings.script_file)
    }

    /// Path the blueprint artifact is written to.
    pub fn blueprint_path(&self) -> PathBuf {
        self.settings.directory.join(&self.settings.blueprint_file)
    }

    /// Path the timing-aligned blueprint is written to.
    pub fn render_blueprint_path(&self) -> PathBuf {
        self.settings
            .directory
            .join(&self.settings.render_blueprint_file)
    }

    /// Write the script artifact.
    pub async fn write_script(&self, script: &Script) -> ExplainerResult<PathBuf> {
        self.write_json(self.script_path(), script).await
    }

    /// Write the blueprint artifact.
    pub async fn write_blueprint(&self, blueprint: &Blueprint) -> ExplainerResult<PathBuf> {
        self.write_json(self.blueprint_path(), blueprint).await
    }

    /// Write the timing-aligned blueprint.
    pub async fn write_render_blueprint(&self, blueprint: &Blueprint) -> ExplainerResult<PathBuf> {
        self.write_json(self.render_blueprint_path(), blueprint).await
    }

    #[instrument(skip(self, value), fields(path = %path.display()))]
    async fn write_json<T: Serialize>(&self, path: PathBuf, value: &T) -> ExplainerResult<PathBuf> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| JsonError::new(format!("Failed to serialize artifact: {}", e)))?;

        tokio::fs::create_dir_all(&self.settings.directory)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.settings.directory.display(),
                    e
                )))
            })?;

        tokio::fs::write(&path, json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        info!("Saved artifact");
        Ok(path)
    }
}
