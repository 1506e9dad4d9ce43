use explainer_core::{FIXED_STYLE_PROFILE, RequestKind, Script, ScriptScene};
use explainer_models::MockResponseGenerator;
use explainer_pipeline::{
    SCRIPT_SYSTEM_PROMPT, blueprint_system_prompt, blueprint_user_prompt, script_user_prompt,
};

#[test]
fn script_prompt_describes_output_shape() {
    assert!(SCRIPT_SYSTEM_PROMPT.contains("scene-by-scene narration script"));
    assert!(SCRIPT_SYSTEM_PROMPT.contains("\"scenes\""));
    assert!(SCRIPT_SYSTEM_PROMPT.contains("STRICTLY follow the JSON format"));
}

#[test]
fn blueprint_prompt_embeds_style_profile_verbatim() -> anyhow::Result<()> {
    let prompt = blueprint_system_prompt(&FIXED_STYLE_PROFILE)?;
    let profile_json = FIXED_STYLE_PROFILE.to_pretty_json()?;

    assert!(prompt.contains("Visual Style Profile"));
    assert!(prompt.contains(&profile_json));
    assert!(prompt.contains("\"blueprint\""));
    Ok(())
}

#[test]
fn user_prompts_embed_stage_input() -> anyhow::Result<()> {
    assert_eq!(script_user_prompt("How Web Sockets Work"), "Topic: How Web Sockets Work");
    assert_eq!(script_user_prompt(""), "Topic: ");

    let script = Script::new(vec![ScriptScene::new(1, "Frames carry data.", "Framing")]);
    let prompt = blueprint_user_prompt(&script)?;
    assert!(prompt.starts_with("Script: ["));
    assert!(prompt.contains("\"narration\": \"Frames carry data.\""));
    Ok(())
}

#[test]
fn stage_prompts_are_recognized_without_tags() -> anyhow::Result<()> {
    assert_eq!(
        MockResponseGenerator::stage_from_prompt(SCRIPT_SYSTEM_PROMPT),
        Some(RequestKind::Script)
    );
    assert_eq!(
        MockResponseGenerator::stage_from_prompt(&blueprint_system_prompt(&FIXED_STYLE_PROFILE)?),
        Some(RequestKind::Blueprint)
    );
    Ok(())
}
