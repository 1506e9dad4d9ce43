//! Stage response validation.
//!
//! Provider JSON is checked field by field before it becomes a typed
//! [`Script`] or [`Blueprint`]. Error reasons name the 1-based scene position
//! and the offending field. Unknown fields are ignored. An empty scene list is
//! accepted.

use explainer_core::{Blueprint, BlueprintScene, Script, ScriptScene};
use explainer_error::SchemaError;
use serde_json::{Map, Value};

/// Type name used in error reasons.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct SceneFields<'a> {
    position: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> SceneFields<'a> {
    fn scene_number(&self) -> Result<u32, String> {
        let expected = self.position;
        match self.fields.get("scene_number") {
            Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) if n as usize == expected => Ok(n),
                Some(n) => Err(format!(
                    "scene {}: `scene_number` must be {}, got {}",
                    expected, expected, n
                )),
                None => Err(format!(
                    "scene {}: `scene_number` must be a positive integer, got {}",
                    expected, value
                )),
            },
            None => Err(format!("scene {}: missing `scene_number`", expected)),
        }
    }

    fn string(&self, key: &str) -> Result<&'a str, String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(format!(
                "scene {}: `{}` must be a string, got {}",
                self.position,
                key,
                type_name(other)
            )),
            None => Err(format!("scene {}: missing `{}`", self.position, key)),
        }
    }

    fn non_empty_string(&self, key: &str) -> Result<&'a str, String> {
        let s = self.string(key)?;
        if s.trim().is_empty() {
            return Err(format!("scene {}: `{}` must not be empty", self.position, key));
        }
        Ok(s)
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, String> {
        let invalid = || {
            format!(
                "scene {}: `{}` must be an array of strings",
                self.position, key
            )
        };
        match self.fields.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
                .collect(),
            Some(_) => Err(invalid()),
            None => Err(format!("scene {}: missing `{}`", self.position, key)),
        }
    }

    fn positive_seconds(&self, key: &str) -> Result<f64, String> {
        match self.fields.get(key).map(|v| (v, v.as_f64())) {
            Some((_, Some(seconds))) if seconds.is_finite() && seconds > 0.0 => Ok(seconds),
            Some((value, _)) => Err(format!(
                "scene {}: `{}` must be a positive number, got {}",
                self.position, key, value
            )),
            None => Err(format!("scene {}: missing `{}`", self.position, key)),
        }
    }
}

/// The array stored under `key`, with each element checked to be an object.
fn scene_objects<'a>(value: &'a Value, key: &str) -> Result<Vec<SceneFields<'a>>, String> {
    let scenes = match value.get(key) {
        Some(Value::Array(scenes)) => scenes,
        Some(other) => {
            return Err(format!(
                "`{}` must be an array, got {}",
                key,
                type_name(other)
            ));
        }
        None => return Err(format!("response has no `{}` array", key)),
    };

    scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| match scene {
            Value::Object(fields) => Ok(SceneFields {
                position: i + 1,
                fields,
            }),
            other => Err(format!(
                "scene {}: expected an object, got {}",
                i + 1,
                type_name(other)
            )),
        })
        .collect()
}

/// Validate a script stage response of shape `{ "scenes": [...] }`.
///
/// # Errors
///
/// `InvalidScriptFormat` naming the first violation.
pub fn validate_script(value: &Value) -> Result<Script, SchemaError> {
    let scenes = scene_objects(value, "scenes").map_err(|reason| SchemaError::script(reason))?;

    scenes
        .iter()
        .map(|scene| -> Result<ScriptScene, String> {
            Ok(ScriptScene::new(
                scene.scene_number()?,
                scene.non_empty_string("narration")?,
                scene.non_empty_string("explanation")?,
            ))
        })
        .collect::<Result<Vec<_>, String>>()
        .map(Script::new)
        .map_err(|reason| SchemaError::script(reason))
}

/// Validate a blueprint stage response of shape `{ "blueprint": [...] }`.
///
/// # Errors
///
/// `InvalidBlueprintFormat` naming the first violation.
pub fn validate_blueprint(value: &Value) -> Result<Blueprint, SchemaError> {
    let scenes =
        scene_objects(value, "blueprint").map_err(|reason| SchemaError::blueprint(reason))?;

    scenes
        .iter()
        .map(|scene| -> Result<BlueprintScene, String> {
            BlueprintScene::builder()
                .scene_number(scene.scene_number()?)
                .visual_elements(scene.string_list("visual_elements")?)
                .text_overlays(scene.string_list("text_overlays")?)
                .animation_actions(scene.string_list("animation_actions")?)
                .duration_seconds(scene.positive_seconds("duration_seconds")?)
                .transition(scene.string("transition")?)
                .asset_prompt(scene.string("asset_prompt")?)
                .build()
                .map_err(|e| format!("scene {}: {}", scene.position, e))
        })
        .collect::<Result<Vec<_>, String>>()
        .map(Blueprint::new)
        .map_err(|reason| SchemaError::blueprint(reason))
}

/// Require one blueprint scene per script scene, in the same order.
///
/// # Errors
///
/// `InvalidBlueprintFormat` on a count or numbering mismatch.
pub fn check_alignment(script: &Script, blueprint: &Blueprint) -> Result<(), SchemaError> {
    if script.len() != blueprint.len() {
        return Err(SchemaError::blueprint(format!(
            "blueprint has {} scenes but the script has {}",
            blueprint.len(),
            script.len()
        )));
    }

    for (script_scene, blueprint_scene) in script.iter().zip(blueprint.iter()) {
        if script_scene.scene_number() != blueprint_scene.scene_number() {
            return Err(SchemaError::blueprint(format!(
                "blueprint scene {} does not match script scene {}",
                blueprint_scene.scene_number(),
                script_scene.scene_number()
            )));
        }
    }
    Ok(())
}
