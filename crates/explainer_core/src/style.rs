//! The fixed visual style profile.

use explainer_error::{ExplainerResult, JsonError};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Visual constraints every blueprint must respect.
///
/// Field order is the serialization order, and the serialized form is pasted
/// verbatim into the blueprint prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct StyleProfile {
    /// Kind of animation (e.g. "2D explainer")
    animation_type: String,
    /// Vocabulary of visual primitives
    visual_language: String,
    /// How concepts are explained on screen
    explanation_method: String,
    /// Typography treatment
    text_style: String,
    /// Motion treatment
    motion_style: String,
    /// Tone of the narration
    narrative_style: String,
    /// Hard rules, in priority order
    constraints: Vec<String>,
}

/// The single style profile used by every pipeline run.
///
/// # Examples
///
/// ```
/// use explainer_core::FIXED_STYLE_PROFILE;
///
/// assert_eq!(FIXED_STYLE_PROFILE.animation_type(), "2D explainer");
/// assert_eq!(FIXED_STYLE_PROFILE.constraints()[0], "No characters");
/// ```
pub static FIXED_STYLE_PROFILE: LazyLock<StyleProfile> = LazyLock::new(|| StyleProfile {
    animation_type: "2D explainer".to_string(),
    visual_language: "shapes, lines, arrows".to_string(),
    explanation_method: "flow diagrams".to_string(),
    text_style: "kinetic typography".to_string(),
    motion_style: "smooth and minimal".to_string(),
    narrative_style: "technical and instructional".to_string(),
    constraints: [
        "No characters",
        "No photorealism",
        "Flat, 2D design",
        "Minimal color palette",
        "High contrast visuals",
        "Abstract shapes (rectangles, circles, arrows)",
        "No realistic imagery",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
});

impl StyleProfile {
    /// Pretty-printed JSON form, as embedded in prompts.
    pub fn to_pretty_json(&self) -> ExplainerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            JsonError::new(format!("Failed to serialize style profile: {}", e)).into()
        })
    }
}
