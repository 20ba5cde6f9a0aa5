// Host-side tests for the dragon ball ornament animation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod clock {
    include!("../src/core/clock.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod ornament {
    include!("../src/core/ornament.rs");
}

use clock::{AnimationClock, FrameSignal};
use glam::Vec3;
use ornament::*;
use scene::{ApplyTransform, NodeUpdate};
use scroll::ScrollProgress;
use std::f32::consts::TAU;
use std::time::Duration;

const EPS: f32 = 1e-5;

#[derive(Default)]
struct Recorder {
    updates: Vec<NodeUpdate>,
}

impl ApplyTransform for Recorder {
    fn apply(&mut self, update: &NodeUpdate) {
        self.updates.push(*update);
    }
}

/// Only the group and the first three stars are attached.
#[derive(Default)]
struct PartialTargets {
    group: Recorder,
    stars: [Recorder; 3],
}

impl OrnamentTargets for PartialTargets {
    fn group(&mut self) -> Option<&mut dyn ApplyTransform> {
        Some(&mut self.group)
    }
    fn core(&mut self) -> Option<&mut dyn ApplyTransform> {
        None
    }
    fn shell(&mut self) -> Option<&mut dyn ApplyTransform> {
        None
    }
    fn rings(&mut self) -> Option<&mut dyn ApplyTransform> {
        None
    }
    fn orb(&mut self, _index: usize) -> Option<&mut dyn ApplyTransform> {
        None
    }
    fn star(&mut self, index: usize) -> Option<&mut dyn ApplyTransform> {
        self.stars
            .get_mut(index)
            .map(|s| s as &mut dyn ApplyTransform)
    }
}

fn signal(progress: f32, elapsed_ms: u64, dt: f32) -> FrameSignal {
    let mut clock = AnimationClock::new();
    clock.advance(Duration::from_millis(elapsed_ms));
    FrameSignal::new(ScrollProgress::from_ratio(progress), &clock, dt)
}

#[test]
fn group_transform_follows_scroll() {
    let t0 = group_transform(ScrollProgress::START);
    assert_eq!(t0.rotation, Vec3::ZERO);
    assert!(t0.translation.y.abs() < EPS);

    let quarter = group_transform(ScrollProgress::from_ratio(0.25));
    assert!((quarter.rotation.y - TAU / 4.0).abs() < EPS);
    assert!((quarter.translation.y - 0.5).abs() < EPS);

    let end = group_transform(ScrollProgress::END);
    assert!((end.rotation.y - TAU).abs() < EPS);
    assert!(end.translation.y.abs() < 1e-4);
}

#[test]
fn pulse_curves_match_their_formulas() {
    let t = 0.7_f32;
    assert!((core_scale(t) - (1.0 + (3.0 * t).sin() * 0.03)).abs() < EPS);

    let (scale, opacity) = shell_pulse(t);
    assert!((scale - (1.0 + (2.0 * t).sin() * 0.05)).abs() < EPS);
    assert!((opacity - (0.2 + (2.0 * t).sin() * 0.1)).abs() < EPS);

    for i in 0..DRAGON_STAR_COUNT {
        let (s, e) = star_pulse(t, i);
        let phase = (5.0 * t + i as f32).sin();
        assert!((s - (1.0 + phase * 0.2)).abs() < EPS);
        assert!((e - (0.5 + phase * 0.5)).abs() < EPS);
        assert!((0.0..=1.0).contains(&e));
    }
}

#[test]
fn curves_are_deterministic() {
    for i in 0..ORB_COUNT {
        assert_eq!(orb_drift(1.25, i), orb_drift(1.25, i));
        assert_eq!(orb_base_position(i), orb_base_position(i));
    }
    let d = orb_drift(0.0, 0);
    assert!((d - Vec3::new(0.0, 0.001, 0.0)).length() < EPS);
}

#[test]
fn unattached_slots_are_skipped() {
    let mut animator = OrnamentAnimator::new();
    let mut targets = PartialTargets::default();
    animator.update(&signal(0.5, 1000, 1.0 / 60.0), &mut targets);

    assert_eq!(targets.group.updates.len(), 1);
    let g = targets.group.updates[0].transform.expect("group transform");
    assert!((g.rotation.y - TAU * 0.5).abs() < EPS);

    for (i, star) in targets.stars.iter().enumerate() {
        assert_eq!(star.updates.len(), 1);
        let (_, emissive) = star_pulse(1.0, i);
        let got = star.updates[0].emissive_intensity.expect("emissive");
        assert!((got - emissive).abs() < EPS);
    }

    // rings and orbs were never attached, so their state did not advance
    assert_eq!(animator.ring_rotation(), Vec3::ZERO);
    assert_eq!(animator.orb_offset(0), Vec3::ZERO);
}

#[test]
fn ring_spin_advances_a_fixed_step_per_frame() {
    for dt in [1.0 / 60.0, 1.0 / 120.0, 1.0 / 144.0] {
        let mut animator = OrnamentAnimator::new();
        let mut model = OrnamentModel::mounted();
        animator.update(&signal(0.0, 0, dt), &mut model);
        let r = animator.ring_rotation();
        assert!((r - Vec3::new(0.002, 0.003, 0.001)).length() < 1e-7, "dt {}: {:?}", dt, r);

        for _ in 0..59 {
            animator.update(&signal(0.0, 0, dt), &mut model);
        }
        let r = animator.ring_rotation();
        assert!((r - Vec3::new(0.12, 0.18, 0.06)).length() < 1e-4, "dt {}: {:?}", dt, r);
    }
}

#[test]
fn orb_drift_is_at_most_a_thousandth_per_frame() {
    for dt in [1.0 / 60.0, 1.0 / 144.0] {
        let mut animator = OrnamentAnimator::new();
        let mut model = OrnamentModel::mounted();
        animator.update(&signal(0.0, 700, dt), &mut model);
        for i in 0..ORB_COUNT {
            let step = animator.orb_offset(i);
            let expected = orb_drift(0.7, i);
            assert!((step - expected).length() < 1e-7);
            assert!(step.abs().max_element() <= 0.001 + 1e-7);
        }
    }
}

#[test]
fn zero_dt_does_not_advance_incremental_state() {
    let mut animator = OrnamentAnimator::new();
    let mut model = OrnamentModel::mounted();
    animator.update(&signal(0.2, 300, 0.0), &mut model);
    assert_eq!(animator.ring_rotation(), Vec3::ZERO);
    for i in 0..ORB_COUNT {
        assert_eq!(animator.orb_offset(i), Vec3::ZERO);
    }
}

#[test]
fn mounted_model_draws_every_part() {
    let unmounted = OrnamentModel::unmounted();
    let mut items = Vec::new();
    unmounted.draw(&mut items);
    assert!(items.is_empty());

    let model = OrnamentModel::mounted();
    model.draw(&mut items);
    // shell + core (3 spheres + motes) + stars + 4 rings + orbs + specks
    let expected = 1 + 3 + INNER_MOTE_COUNT + DRAGON_STAR_COUNT + 4 + ORB_COUNT + ENERGY_SPECK_COUNT;
    assert_eq!(items.len(), expected);
}

#[test]
fn animating_the_model_moves_the_stars() {
    let mut animator = OrnamentAnimator::new();
    let mut model = OrnamentModel::mounted();
    animator.update(&signal(0.0, 250, 1.0 / 60.0), &mut model);
    let star = model.stars[2].expect("star mounted");
    let (scale, emissive) = star_pulse(0.25, 2);
    assert!((star.transform.scale.x - 0.15 * scale).abs() < EPS);
    assert!((star.material.emissive_intensity - emissive).abs() < EPS);
    assert_eq!(
        star.transform.translation,
        Vec3::from_array(DRAGON_STAR_POSITIONS[2])
    );
}
