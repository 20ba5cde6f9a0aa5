// Host-side tests for the character viewer state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod viewer {
    include!("../src/core/viewer.rs");
}

use catalog::CHARACTERS;
use scene::{MeshKind, WireMode};
use viewer::*;

fn open_goku() -> (CharacterViewer, u64) {
    let mut v = CharacterViewer::new();
    let session = v.open(&CHARACTERS[0]);
    (v, session)
}

#[test]
fn opens_in_auto_rotation() {
    let (v, _) = open_goku();
    assert!(v.is_open());
    assert_eq!(v.mode(), Some(ViewerMode::AutoRotating));
    assert_eq!(v.selected().map(|e| e.name), Some("Goku"));
    let s = v.state().expect("open");
    assert_eq!(s.rotation_angle, 0.0);
    assert_eq!(s.texture, TextureStatus::Loading);
}

#[test]
fn rotate_left_takes_manual_control() {
    let (mut v, _) = open_goku();
    v.rotate_left();
    assert_eq!(v.mode(), Some(ViewerMode::ManualControl));
    assert_eq!(v.state().map(|s| s.rotation_angle), Some(-0.5));

    v.rotate_right();
    v.rotate_right();
    assert_eq!(v.state().map(|s| s.rotation_angle), Some(0.5));
}

#[test]
fn auto_toggle_keeps_the_manual_angle() {
    let (mut v, _) = open_goku();
    v.rotate_left();
    v.toggle_auto();
    assert_eq!(v.mode(), Some(ViewerMode::AutoRotating));
    assert_eq!(v.state().map(|s| s.rotation_angle), Some(-0.5));

    // the button flips both ways
    v.toggle_auto();
    assert_eq!(v.mode(), Some(ViewerMode::ManualControl));
}

#[test]
fn auto_rotation_only_advances_in_auto_mode() {
    let (mut v, _) = open_goku();
    v.tick(15.0);
    let half_turn = v.state().map(|s| s.orbit_yaw).unwrap_or_default();
    assert!((half_turn - std::f32::consts::PI).abs() < 1e-4);

    v.rotate_right();
    v.tick(10.0);
    let s = v.state().expect("open");
    assert!((s.orbit_yaw - half_turn).abs() < 1e-6);
    assert!((s.yaw() - (half_turn + 0.5)).abs() < 1e-5);

    // bad frame times are ignored
    v.toggle_auto();
    v.tick(f32::NAN);
    v.tick(-1.0);
    assert!((v.state().expect("open").orbit_yaw - half_turn).abs() < 1e-6);
}

#[test]
fn dragging_orbits_and_takes_control() {
    let (mut v, _) = open_goku();
    v.begin_drag();
    assert_eq!(v.mode(), Some(ViewerMode::ManualControl));
    v.drag_by(0.25);
    v.drag_by(0.25);
    let s = v.state().expect("open");
    assert!((s.orbit_yaw - 0.5).abs() < 1e-6);
    assert_eq!(s.rotation_angle, 0.0);
}

#[test]
fn close_discards_state() {
    let (mut v, _) = open_goku();
    v.rotate_left();
    v.apply(ViewerAction::Close);
    assert!(!v.is_open());
    assert!(v.mode().is_none());
    // actions on a closed viewer are no-ops
    v.rotate_left();
    v.tick(1.0);
    assert!(v.state().is_none());

    // reopening starts fresh
    v.open(&CHARACTERS[1]);
    assert_eq!(v.mode(), Some(ViewerMode::AutoRotating));
    assert_eq!(v.state().map(|s| s.rotation_angle), Some(0.0));
}

#[test]
fn stale_texture_loads_are_rejected() {
    let (mut v, first) = open_goku();
    let second = v.open(&CHARACTERS[2]);
    assert_ne!(first, second);
    assert!(!v.accepts(first));
    assert!(v.accepts(second));

    assert!(!v.resolve_texture(first, true));
    assert_eq!(v.state().map(|s| s.texture), Some(TextureStatus::Loading));

    assert!(v.resolve_texture(second, true));
    assert_eq!(v.state().map(|s| s.texture), Some(TextureStatus::Ready));

    v.close();
    assert!(!v.accepts(second));
    assert!(!v.resolve_texture(second, false));
}

#[test]
fn failed_texture_falls_back_to_placeholder() {
    let (mut v, session) = open_goku();
    assert!(v.resolve_texture(session, false));
    let s = v.state().expect("open");
    assert_eq!(s.texture, TextureStatus::Failed);
    let [front, back, edges] = s.card_nodes();
    assert!(!front.material.textured);
    assert_eq!(front.material.color, CHARACTERS[0].color_tag.primary_rgb());
    assert_eq!(back.mesh, MeshKind::Quad);
    assert_eq!(edges.mesh, MeshKind::Cuboid);
    assert_eq!(edges.material.wire, WireMode::Edges);
}

#[test]
fn gold_edge_frame_is_faint() {
    let (v, _) = open_goku();
    let [front, _, edges] = v.state().expect("open").card_nodes();
    assert!((edges.material.opacity - 0.3).abs() < 1e-6);
    assert!(edges.material.is_blended());
    assert_eq!(front.material.opacity, 1.0);
}

#[test]
fn card_is_three_by_four_and_follows_yaw() {
    let (mut v, session) = open_goku();
    v.resolve_texture(session, true);
    v.rotate_right();
    let s = v.state().expect("open");
    let [front, _, edges] = s.card_nodes();
    assert!(front.material.textured);
    assert_eq!(front.transform.scale.x, 3.0);
    assert_eq!(front.transform.scale.y, 4.0);
    assert!((edges.transform.scale.z - 0.2).abs() < 1e-6);

    let mut items = Vec::new();
    s.draw(&mut items);
    assert_eq!(items.len(), 3);
    assert!((s.card_transform().rotation.y - s.yaw()).abs() < 1e-6);
}

#[test]
fn key_bindings() {
    assert_eq!(ViewerAction::for_key("ArrowLeft"), Some(ViewerAction::RotateLeft));
    assert_eq!(ViewerAction::for_key("ArrowRight"), Some(ViewerAction::RotateRight));
    assert_eq!(ViewerAction::for_key("a"), Some(ViewerAction::ToggleAuto));
    assert_eq!(ViewerAction::for_key("A"), Some(ViewerAction::ToggleAuto));
    assert_eq!(ViewerAction::for_key("Escape"), Some(ViewerAction::Close));
    assert_eq!(ViewerAction::for_key("ArrowUp"), None);
    assert_eq!(ViewerAction::for_key(""), None);
}
