// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_box_hits_the_card_head_on() {
    let ro = Vec3::new(0.0, 0.0, 6.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    let t = ray_box(ro, rd, Vec3::ZERO, Vec3::new(1.5, 2.0, 0.1));
    assert!(t.is_some());
    assert!((t.unwrap() - 5.9).abs() < 1e-5);
}

#[test]
fn ray_box_misses_beside_the_card() {
    let ro = Vec3::new(2.0, 0.0, 6.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    assert!(ray_box(ro, rd, Vec3::ZERO, Vec3::new(1.5, 2.0, 0.1)).is_none());
}

#[test]
fn ray_box_ignores_boxes_behind_the_ray() {
    let ro = Vec3::new(0.0, 0.0, 6.0);
    let rd = Vec3::new(0.0, 0.0, 1.0);
    assert!(ray_box(ro, rd, Vec3::ZERO, Vec3::splat(1.0)).is_none());
}

#[test]
fn ray_box_from_inside_returns_exit() {
    let t = ray_box(Vec3::ZERO, Vec3::X, Vec3::ZERO, Vec3::splat(1.0));
    assert!((t.unwrap() - 1.0).abs() < 1e-6);
}

#[test]
fn ray_box_oblique_hit() {
    let ro = Vec3::new(-3.0, 0.0, 3.0);
    let rd = Vec3::new(1.0, 0.0, -1.0).normalize();
    assert!(ray_box(ro, rd, Vec3::ZERO, Vec3::new(1.5, 2.0, 0.1)).is_some());
}

#[test]
fn drag_delta_is_one_turn_per_canvas_height() {
    let full = drag_yaw_delta(600.0, 600.0);
    assert!((full - std::f32::consts::TAU).abs() < 1e-5);
    assert!((drag_yaw_delta(-150.0, 600.0) + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    assert_eq!(drag_yaw_delta(10.0, 0.0), 0.0);
    assert_eq!(drag_yaw_delta(f32::NAN, 600.0), 0.0);
}

#[test]
fn drag_state_tracks_horizontal_steps() {
    let mut d = DragState::default();
    assert_eq!(d.step(10.0), None);
    d.begin(100.0, 1);
    assert_eq!(d.step(130.0), Some(30.0));
    assert_eq!(d.step(120.0), Some(-10.0));
    d.end();
    assert!(!d.active);
    assert_eq!(d.step(200.0), None);
}
