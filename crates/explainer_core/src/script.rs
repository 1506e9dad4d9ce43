//! The stage 1 artifact.

use crate::ScriptScene;
use explainer_error::{ExplainerResult, JsonError};
use serde::{Deserialize, Serialize};

/// Ordered list of narrated scenes.
///
/// Serializes as a bare JSON array, which is the persisted
/// `output_script.json` format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script(Vec<ScriptScene>);

impl Script {
    /// Wrap an ordered scene list.
    pub fn new(scenes: Vec<ScriptScene>) -> Self {
        Self(scenes)
    }

    /// Scenes in order.
    pub fn scenes(&self) -> &[ScriptScene] {
        &self.0
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the script has no scenes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate scenes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScriptScene> {
        self.0.iter()
    }

    /// Look up a scene by its number.
    pub fn scene(&self, scene_number: u32) -> Option<&ScriptScene> {
        self.0.iter().find(|s| *s.scene_number() == scene_number)
    }

    /// Pretty-printed JSON array.
    pub fn to_pretty_json(&self) -> ExplainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize script: {}", e)).into())
    }
}

impl From<Vec<ScriptScene>> for Script {
    fn from(scenes: Vec<ScriptScene>) -> Self {
        Self(scenes)
    }
}

impl FromIterator<ScriptScene> for Script {
    fn from_iter<I: IntoIterator<Item = ScriptScene>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptScene;
    type IntoIter = std::slice::Iter<'a, ScriptScene>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
