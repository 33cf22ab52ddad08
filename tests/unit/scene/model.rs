use super::*;

#[test]
fn direction_accepts_object_with_and_without_z() {
    let d: DirectionDef = serde_json::from_str(r#"{"x": 0, "y": -1, "z": 0.5}"#).unwrap();
    assert_eq!(d, DirectionDef { x: 0.0, y: -1.0, z: Some(0.5) });

    let d: DirectionDef = serde_json::from_str(r#"{"x": -400, "y": 0}"#).unwrap();
    assert_eq!(d, DirectionDef { x: -400.0, y: 0.0, z: None });
}

#[test]
fn direction_accepts_two_and_three_element_arrays() {
    let d: DirectionDef = serde_json::from_str("[1, 2]").unwrap();
    assert_eq!(d, DirectionDef { x: 1.0, y: 2.0, z: None });

    let d: DirectionDef = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(d, DirectionDef { x: 1.0, y: 2.0, z: Some(3.0) });
}

#[test]
fn direction_xyz_defaults_missing_z_to_zero() {
    let d: DirectionDef = serde_json::from_str("[4, 5]").unwrap();
    assert_eq!(d.xyz(), (4.0, 5.0, 0.0));
}

#[test]
fn component_defaults_are_applied() {
    let c: ComponentDef =
        serde_json::from_str(r#"{"filename": "70000001.glb", "direction": [0, -1, 0]}"#).unwrap();
    assert_eq!(c.display_name(), "70000001.glb");
    assert_eq!(c.explode_distance, None);
    assert_eq!(c.scale, 1.0);
    assert_eq!(c.rotation_deg, 0.0);
    assert_eq!(c.z_index, None);
    assert_eq!(c.opacity, 1.0);
}

#[test]
fn component_name_overrides_display_name() {
    let c: ComponentDef = serde_json::from_str(
        r#"{"filename": "70000001.glb", "name": "Frame", "direction": [0, -1, 0]}"#,
    )
    .unwrap();
    assert_eq!(c.display_name(), "Frame");
}

#[test]
fn assembly_defaults_match_the_documented_values() {
    let def: AssemblyDef = serde_json::from_str(
        r#"{"components": [{"filename": "a.glb", "direction": [0, 1, 0]}]}"#,
    )
    .unwrap();
    assert_eq!(def.version, ASSEMBLY_VERSION_STR);
    assert_eq!(def.explode_distance, 200.0);
    assert_eq!(def.timing.duration_ms, 1000.0);
    assert_eq!(def.timing.delay_ms, 300.0);
    assert_eq!(def.timing.easing, "in_out_cubic");
}

#[test]
fn assembly_roundtrips_through_json() {
    let src = r#"{
        "version": "1",
        "timing": {"duration_ms": 1500, "delay_ms": 300, "easing": "in_out_quad"},
        "explode_distance": 200,
        "components": [
            {"filename": "a.glb", "name": "A", "direction": {"x": 0, "y": -1, "z": 0}, "explode_distance": 300},
            {"filename": "b.glb", "name": "B", "direction": {"x": -1, "y": 0, "z": 0}}
        ]
    }"#;
    let def: AssemblyDef = serde_json::from_str(src).unwrap();
    let json = serde_json::to_string(&def).unwrap();
    let again: AssemblyDef = serde_json::from_str(&json).unwrap();
    assert_eq!(again.components.len(), 2);
    assert_eq!(again.components[0].explode_distance, Some(300.0));
    assert_eq!(again.timing.duration_ms, 1500.0);
}
