use cloud_core::panel::{panel_layout, CONTROLS};
use cloud_core::{GenerationParameters, ParameterError, PrimitiveKind};

#[test]
fn test_partial_json_fills_defaults() {
    let params =
        GenerationParameters::from_json(r#"{"count": 8, "primitiveKind": "icosahedron"}"#).unwrap();
    assert_eq!(params.count, 8);
    assert_eq!(params.primitive_kind, PrimitiveKind::Icosahedron);
    assert_eq!(params.scale_min, 0.25);
    assert_eq!(params.random_intensity, 1.0);
}

#[test]
fn test_json_uses_panel_names() {
    let json = GenerationParameters::default().to_json().unwrap();
    for c in CONTROLS.iter() {
        assert!(json.contains(&format!("\"{}\"", c.name)), "{} missing from {}", c.name, json);
    }
    assert!(json.contains("\"primitiveKind\":\"box\""));
}

#[test]
fn test_bad_json_is_reported() {
    let err = GenerationParameters::from_json("{count: }").unwrap_err();
    assert!(matches!(err, ParameterError::Json(_)));
}

#[test]
fn test_panel_layout_lists_kinds() {
    let layout = panel_layout();
    assert_eq!(layout.controls.len(), CONTROLS.len());
    assert_eq!(layout.primitive_kinds, vec!["box", "icosahedron"]);
    let json = serde_json::to_string(&layout).unwrap();
    assert!(json.contains("primitiveKinds"));
}
