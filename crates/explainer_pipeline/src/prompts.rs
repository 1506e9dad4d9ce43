//! Stage prompts.

use explainer_core::{Script, StyleProfile};
use explainer_error::ExplainerResult;

/// System prompt for the narration script stage.
pub const SCRIPT_SYSTEM_PROMPT: &str = r#"
You are an expert scriptwriter for technical explainer videos.
Your task is to convert a given topic into a scene-by-scene narration script.

REQUIREMENTS:
- Break the topic into multiple scenes
- One concept per scene
- Simple, instructional language
- Short sentences
- Narration suitable for AI voice-over
- No storytelling or conversational tone
- STRICTLY follow the JSON format

OUTPUT FORMAT (JSON):
{
  "scenes": [
    {
      "scene_number": 1,
      "narration": "Short voice-over sentence",
      "explanation": "Brief explanation of the concept"
    }
  ]
}
"#;

const BLUEPRINT_PROMPT_HEAD: &str = r#"
You are an expert animation director for 2D technical explainer videos.
Your task is to convert a narration script into a visual animation blueprint.

CRITICAL: You MUST strictly adhere to the following Visual Style Profile.
"#;

const BLUEPRINT_PROMPT_TAIL: &str = r#"

BLUEPRINT REQUIREMENTS:
For each scene, define:
- Visual elements: Use only shapes, lines, arrows, icons (No characters!)
- On-screen text: Keywords only (No full sentences)
- Animation actions: slide-in, fade-in, draw-line, zoom, etc.
- Timing: Estimate duration in seconds based on narration length.
- Scene transition: fade, slide, cut, etc.
- Asset generation prompt: A description for generating the vector assets.

OUTPUT FORMAT (JSON):
{
  "blueprint": [
    {
      "scene_number": 1,
      "visual_elements": ["rectangle", "arrow"],
      "text_overlays": ["Keyword"],
      "animation_actions": ["slide-in", "draw-line"],
      "duration_seconds": 6,
      "transition": "fade",
      "asset_prompt": "Minimal 2D vector icon of a database"
    }
  ]
}
"#;

/// System prompt for the blueprint stage with the style profile embedded.
///
/// # Errors
///
/// Fails only if the profile cannot be serialized.
pub fn blueprint_system_prompt(profile: &StyleProfile) -> ExplainerResult<String> {
    Ok(format!(
        "{}{}{}",
        BLUEPRINT_PROMPT_HEAD,
        profile.to_pretty_json()?,
        BLUEPRINT_PROMPT_TAIL
    ))
}

/// User prompt for the script stage. The topic is embedded verbatim.
pub fn script_user_prompt(topic: &str) -> String {
    format!("Topic: {}", topic)
}

/// User prompt for the blueprint stage.
pub fn blueprint_user_prompt(script: &Script) -> ExplainerResult<String> {
    Ok(format!("Script: {}", script.to_pretty_json()?))
}
