//! Per-scene records produced by the two stages.

use serde::{Deserialize, Serialize};

/// One narrated scene of a script.
///
/// # Examples
///
/// ```
/// use explainer_core::ScriptScene;
///
/// let scene = ScriptScene::new(1, "Packets travel in frames.", "Framing");
/// assert_eq!(*scene.scene_number(), 1);
/// assert_eq!(scene.narration(), "Packets travel in frames.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct ScriptScene {
    /// 1-based position in the script
    scene_number: u32,
    /// Voice-over text
    narration: String,
    /// Short description of the concept covered
    explanation: String,
}

impl ScriptScene {
    /// Create a scene.
    pub fn new(
        scene_number: u32,
        narration: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            narration: narration.into(),
            explanation: explanation.into(),
        }
    }
}

/// Animation directives for one scene.
///
/// # Examples
///
/// ```
/// use explainer_core::BlueprintScene;
///
/// let scene = BlueprintScene::builder()
///     .scene_number(1u32)
///     .visual_elements(vec!["rectangle".to_string()])
///     .text_overlays(vec!["Handshake".to_string()])
///     .animation_actions(vec!["fade-in".to_string()])
///     .duration_seconds(6.0)
///     .transition("fade")
///     .asset_prompt("Minimal 2D vector icon of a server")
///     .build()
///     .unwrap();
///
/// assert_eq!(scene.transition(), "fade");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct BlueprintScene {
    /// Scene this blueprint entry renders
    scene_number: u32,
    /// Shapes and icons on screen
    visual_elements: Vec<String>,
    /// On-screen keywords
    text_overlays: Vec<String>,
    /// Animation verbs (slide-in, draw-line, ...)
    animation_actions: Vec<String>,
    /// Scene length in seconds
    duration_seconds: f64,
    /// Transition into the next scene (fade, slide, cut, ...)
    transition: String,
    /// Prompt for downstream vector asset generation
    asset_prompt: String,
}

impl BlueprintScene {
    /// Creates a new builder for `BlueprintScene`.
    pub fn builder() -> BlueprintSceneBuilder {
        BlueprintSceneBuilder::default()
    }

    /// Copy of this scene with a different duration.
    pub fn with_duration_seconds(&self, duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            ..self.clone()
        }
    }
}
