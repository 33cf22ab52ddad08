use super::*;

fn def(json: &str) -> AssemblyDef {
    serde_json::from_str(json).unwrap()
}

fn messages(def: &AssemblyDef) -> Vec<String> {
    match validate_assembly(def) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.errors.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn a_well_formed_assembly_passes() {
    let def = def(r#"{
        "timing": {"duration_ms": 1500, "delay_ms": 300, "easing": "in_out_quad"},
        "explode_distance": 200,
        "components": [
            {"filename": "a.glb", "direction": {"x": 0, "y": -1, "z": 0}},
            {"filename": "b.glb", "direction": {"x": -1, "y": 0, "z": 0}, "explode_distance": 300}
        ]
    }"#);
    assert!(validate_assembly(&def).is_ok());
}

#[test]
fn unknown_easing_names_are_not_an_error() {
    let def = def(r#"{
        "timing": {"easing": "wobble"},
        "components": [{"filename": "a", "direction": [1, 0]}]
    }"#);
    assert!(validate_assembly(&def).is_ok());
}

#[test]
fn empty_component_list_is_rejected() {
    let def = def(r#"{"components": []}"#);
    let msgs = messages(&def);
    assert_eq!(msgs, vec!["$.components: components must not be empty"]);
}

#[test]
fn unsupported_version_is_rejected() {
    let def = def(r#"{"version": "2", "components": [{"filename": "a", "direction": [1, 0]}]}"#);
    let msgs = messages(&def);
    assert!(msgs[0].starts_with("$.version: unsupported version"));
}

#[test]
fn duplicate_filenames_are_rejected_with_their_index() {
    let def = def(r#"{
        "components": [
            {"filename": "a.glb", "direction": [1, 0]},
            {"filename": "a.glb", "direction": [0, 1]}
        ]
    }"#);
    let msgs = messages(&def);
    assert_eq!(
        msgs,
        vec!["$.components[1].filename: duplicate filename \"a.glb\""]
    );
}

#[test]
fn zero_direction_is_rejected() {
    let def = def(r#"{"components": [{"filename": "a", "direction": [0, 0, 0]}]}"#);
    let msgs = messages(&def);
    assert_eq!(
        msgs,
        vec!["$.components[0].direction: direction must have a non-zero axis"]
    );
}

#[test]
fn timing_bounds_are_enforced() {
    let def = def(r#"{
        "timing": {"duration_ms": 0, "delay_ms": -5},
        "components": [{"filename": "a", "direction": [1, 0]}]
    }"#);
    let msgs = messages(&def);
    assert!(msgs.contains(&"$.timing.duration_ms: must be finite and > 0".to_owned()));
    assert!(msgs.contains(&"$.timing.delay_ms: must be finite and >= 0".to_owned()));
}

#[test]
fn visual_bounds_are_enforced() {
    let def = def(r#"{
        "components": [
            {"filename": "a", "direction": [1, 0], "scale": 0, "opacity": 1.5}
        ]
    }"#);
    let msgs = messages(&def);
    assert!(msgs.contains(&"$.components[0].scale: scale must be finite and > 0".to_owned()));
    assert!(msgs.contains(&"$.components[0].opacity: opacity must be within [0, 1]".to_owned()));
}

#[test]
fn negative_distance_override_is_rejected() {
    let def = def(r#"{
        "components": [{"filename": "a", "direction": [1, 0], "explode_distance": -1}]
    }"#);
    let msgs = messages(&def);
    assert_eq!(
        msgs,
        vec!["$.components[0].explode_distance: must be finite and >= 0"]
    );
}

#[test]
fn every_violation_is_collected_before_failing() {
    let def = def(r#"{
        "version": "9",
        "timing": {"duration_ms": 0},
        "components": []
    }"#);
    let errors = validate_assembly(&def).unwrap_err();
    assert_eq!(errors.errors.len(), 3);
}
