//! Stage tags carried with completion requests.

use serde::{Deserialize, Serialize};

/// Which pipeline stage issued a request.
///
/// Offline responders use this tag instead of guessing the stage from prompt
/// wording.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RequestKind {
    /// Stage 1: topic to narration script
    Script,
    /// Stage 2: script to animation blueprint
    Blueprint,
}
