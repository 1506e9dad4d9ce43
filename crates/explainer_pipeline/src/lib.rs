//! Stage orchestration for Explainer.
//!
//! A run turns a topic into three artifacts:
//!
//! 1. [`ScriptGenerator`] asks the model for a scene-by-scene narration
//!    script and validates it.
//! 2. [`BlueprintGenerator`] turns the script into per-scene animation
//!    directives constrained by the fixed style profile.
//! 3. [`TimingAligner`] stretches blueprint durations so each scene outlasts
//!    its narration.
//!
//! [`Pipeline`] runs the three steps in order and writes each artifact with
//! [`ArtifactStore`]. Rendering is left to an external tool.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blueprint;
mod pipeline;
mod prompts;
mod script;
mod store;
mod timing;
mod validation;

pub use blueprint::BlueprintGenerator;
pub use pipeline::{Pipeline, PipelineReport};
pub use prompts::{
    SCRIPT_SYSTEM_PROMPT, blueprint_system_prompt, blueprint_user_prompt, script_user_prompt,
};
pub use script::ScriptGenerator;
pub use store::ArtifactStore;
pub use timing::TimingAligner;
pub use validation::{check_alignment, validate_blueprint, validate_script};
