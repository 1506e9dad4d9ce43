use explainer_core::{Blueprint, BlueprintScene, Script, ScriptScene, TimingSettings};
use explainer_pipeline::TimingAligner;

fn scene(n: u32, duration: f64) -> BlueprintScene {
    BlueprintScene::builder()
        .scene_number(n)
        .visual_elements(vec!["circle".to_string()])
        .text_overlays(vec!["Key".to_string()])
        .animation_actions(vec!["fade-in".to_string()])
        .duration_seconds(duration)
        .transition("cut")
        .asset_prompt("Circle")
        .build()
        .unwrap()
}

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn estimate_has_a_floor() {
    let aligner = TimingAligner::new(TimingSettings::default());
    assert_eq!(aligner.estimate_narration_seconds(""), 2.0);
    assert_eq!(aligner.estimate_narration_seconds(&words(4)), 2.0);
    assert_eq!(aligner.estimate_narration_seconds(&words(25)), 10.0);
}

#[test]
fn durations_stretch_but_never_shrink() {
    let aligner = TimingAligner::new(TimingSettings::default());
    let script = Script::new(vec![
        ScriptScene::new(1, words(25), "long"),
        ScriptScene::new(2, words(5), "short"),
    ]);
    let blueprint = Blueprint::new(vec![scene(1, 6.0), scene(2, 8.0)]);

    let aligned = aligner.align(&script, &blueprint);

    // 25 words: 10s + 1s padding beats 6s
    assert_eq!(*aligned.scenes()[0].duration_seconds(), 11.0);
    // 5 words: the 2s floor + 1s padding loses to 8s
    assert_eq!(*aligned.scenes()[1].duration_seconds(), 8.0);
    assert_eq!(*blueprint.scenes()[0].duration_seconds(), 6.0);
}

#[test]
fn unmatched_scenes_keep_their_duration() {
    let aligner = TimingAligner::new(TimingSettings::default());
    let script = Script::new(vec![ScriptScene::new(1, words(50), "only")]);
    let blueprint = Blueprint::new(vec![scene(1, 1.0), scene(2, 3.5)]);

    let aligned = aligner.align(&script, &blueprint);
    assert_eq!(*aligned.scenes()[0].duration_seconds(), 21.0);
    assert_eq!(*aligned.scenes()[1].duration_seconds(), 3.5);
}

#[test]
fn custom_rates_are_respected() {
    let aligner = TimingAligner::new(TimingSettings {
        words_per_second: 2.0,
        min_scene_seconds: 0.0,
        transition_padding: 0.5,
    });
    let script = Script::new(vec![ScriptScene::new(1, words(10), "ten")]);
    let aligned = aligner.align(&script, &Blueprint::new(vec![scene(1, 1.0)]));
    assert_eq!(*aligned.scenes()[0].duration_seconds(), 5.5);
}
