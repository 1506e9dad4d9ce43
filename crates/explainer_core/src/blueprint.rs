//! The stage 2 artifact.

use crate::BlueprintScene;
use explainer_error::{ExplainerResult, JsonError};
use serde::{Deserialize, Serialize};

/// Ordered list of per-scene animation directives.
///
/// Serializes as a bare JSON array (`output_blueprint.json`,
/// `render_blueprint.json`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blueprint(Vec<BlueprintScene>);

impl Blueprint {
    /// Wrap an ordered scene list.
    pub fn new(scenes: Vec<BlueprintScene>) -> Self {
        Self(scenes)
    }

    /// Scenes in order.
    pub fn scenes(&self) -> &[BlueprintScene] {
        &self.0
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the blueprint has no scenes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate scenes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BlueprintScene> {
        self.0.iter()
    }

    /// Sum of all scene durations in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.0.iter().map(|s| *s.duration_seconds()).sum()
    }

    /// Pretty-printed JSON array.
    pub fn to_pretty_json(&self) -> ExplainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize blueprint: {}", e)).into())
    }
}

impl From<Vec<BlueprintScene>> for Blueprint {
    fn from(scenes: Vec<BlueprintScene>) -> Self {
        Self(scenes)
    }
}

impl FromIterator<BlueprintScene> for Blueprint {
    fn from_iter<I: IntoIterator<Item = BlueprintScene>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Blueprint {
    type Item = &'a BlueprintScene;
    type IntoIter = std::slice::Iter<'a, BlueprintScene>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
