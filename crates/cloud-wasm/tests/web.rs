#![cfg(target_arch = "wasm32")]

use cloud_wasm::{CloudWorld, GpuInstance};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_starts_with_default_cloud() {
    let world = CloudWorld::new(800.0, 600.0).unwrap();
    assert_eq!(world.instance_count(), 5);
    assert_eq!(
        world.get_instance_buffer_byte_length(),
        5 * std::mem::size_of::<GpuInstance>()
    );
    assert_eq!(world.get_index_count(), 36);
}

#[wasm_bindgen_test]
fn commit_replaces_cloud() {
    let mut world = CloudWorld::new(800.0, 600.0).unwrap();
    assert_eq!(world.commit_parameter("count", 10.0).unwrap(), 10);
    assert_eq!(world.instance_count(), 10);
}

#[wasm_bindgen_test]
fn set_parameter_waits_for_commit() {
    let mut world = CloudWorld::new(800.0, 600.0).unwrap();
    world.set_parameter("count", 12.0).unwrap();
    assert_eq!(world.instance_count(), 5);
    assert_eq!(world.regenerate().unwrap(), 12);
}

#[wasm_bindgen_test]
fn invalid_parameter_keeps_cloud() {
    let mut world = CloudWorld::new(800.0, 600.0).unwrap();
    assert!(world.commit_parameter("scaleMax", f64::NAN).is_err());
    assert!(world.commit_parameter("bogus", 1.0).is_err());
    assert_eq!(world.instance_count(), 5);
}

#[wasm_bindgen_test]
fn primitive_kind_switch_swaps_geometry() {
    let mut world = CloudWorld::new(800.0, 600.0).unwrap();
    world.set_primitive_kind(1).unwrap();
    assert_eq!(world.primitive_kind(), 1);
    assert_eq!(world.get_index_count(), 60);
    assert_eq!(world.get_vertex_buffer_byte_length(), 12 * 24);
}

#[wasm_bindgen_test]
fn json_roundtrip_through_world() {
    let mut world =
        CloudWorld::from_parameters_json(r#"{"count": 3, "randomIntensity": 0}"#, 640.0, 480.0)
            .unwrap();
    assert_eq!(world.instance_count(), 3);
    assert!(world.parameters_json().unwrap().contains("\"count\":3"));
    assert_eq!(world.set_parameters_json(r#"{"count": 7}"#).unwrap(), 7);
    assert!(world.controls_json().unwrap().contains("randomIntensity"));
}

#[wasm_bindgen_test]
fn resize_and_tick() {
    let mut world = CloudWorld::new(800.0, 400.0).unwrap();
    assert!((world.aspect() - 2.0).abs() < 1e-6);
    world.resize(300.0, 300.0);
    assert!((world.aspect() - 1.0).abs() < 1e-6);
    world.tick(0.5);
    assert!((world.tick(0.25) - 0.75).abs() < 1e-9);
    assert_eq!(world.frame_count(), 2);
}

#[wasm_bindgen_test]
fn light_data_layout() {
    let world = CloudWorld::new(800.0, 600.0).unwrap();
    let lights = world.light_data();
    assert_eq!(lights.len(), 14);
    assert_eq!(lights[3], 1.0);
    assert_eq!(lights[10], 6.0);
    assert_eq!(&lights[11..14], &[0.0, 2.0, 10.0]);
}

#[wasm_bindgen_test]
fn scene_background_and_damping() {
    let world = CloudWorld::new(800.0, 600.0).unwrap();
    assert_eq!(world.background_texture().as_deref(), Some("sky.jpg"));
    assert!(world.damping_enabled());
    assert!((world.damping_factor() - 0.01).abs() < 1e-6);
}

#[wasm_bindgen_test]
fn json_commit_is_capped_to_panel_range() {
    let mut world = CloudWorld::new(800.0, 600.0).unwrap();
    assert_eq!(world.set_parameters_json(r#"{"count": 500}"#).unwrap(), 20);
    assert_eq!(world.instance_count(), 20);
}
