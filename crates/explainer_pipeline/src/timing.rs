//! Narration timing alignment.

use explainer_core::{Blueprint, Script, TimingSettings};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Stretches blueprint durations so each scene outlasts its narration.
///
/// Narration length is estimated from word count:
/// `max(min_scene_seconds, words / words_per_second)`. A scene's aligned
/// duration is `max(original, estimate + transition_padding)`. Durations never
/// shrink.
///
/// # Examples
///
/// ```
/// use explainer_core::TimingSettings;
/// use explainer_pipeline::TimingAligner;
///
/// let aligner = TimingAligner::new(TimingSettings::default());
/// // 10 words at 2.5 words per second
/// let narration = "one two three four five six seven eight nine ten";
/// assert_eq!(aligner.estimate_narration_seconds(narration), 4.0);
/// assert_eq!(aligner.estimate_narration_seconds("Hi."), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimingAligner {
    settings: TimingSettings,
}

impl TimingAligner {
    /// Creates an aligner with the given rates.
    pub fn new(settings: TimingSettings) -> Self {
        Self { settings }
    }

    /// Estimated spoken length of a narration, in seconds.
    pub fn estimate_narration_seconds(&self, narration: &str) -> f64 {
        let words = narration.split_whitespace().count() as f64;
        (words / self.settings.words_per_second).max(self.settings.min_scene_seconds)
    }

    /// New blueprint with durations stretched to fit the script's narration.
    ///
    /// Scenes are matched by `scene_number`. A blueprint scene with no
    /// matching script scene keeps its duration.
    #[instrument(skip_all, fields(scenes = blueprint.len()))]
    pub fn align(&self, script: &Script, blueprint: &Blueprint) -> Blueprint {
        let narration_seconds: HashMap<u32, f64> = script
            .iter()
            .map(|scene| {
                (
                    *scene.scene_number(),
                    self.estimate_narration_seconds(scene.narration()),
                )
            })
            .collect();

        blueprint
            .iter()
            .map(|scene| match narration_seconds.get(scene.scene_number()) {
                Some(estimate) => {
                    let original = *scene.duration_seconds();
                    let aligned = original.max(estimate + self.settings.transition_padding);
                    debug!(
                        scene = scene.scene_number(),
                        original,
                        aligned,
                        "Adjusted scene duration"
                    );
                    scene.with_duration_seconds(aligned)
                }
                None => scene.clone(),
            })
            .collect()
    }
}
