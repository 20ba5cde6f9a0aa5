// Host-side tests for scroll sampling and normalisation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn progress_is_offset_over_scrollable_height() {
    let m = ScrollMetrics::new(500.0, 3000.0, 1000.0);
    assert!((m.scrollable() - 2000.0).abs() < 1e-6);
    assert!((ScrollProgress::from_metrics(&m).get() - 0.25).abs() < 1e-6);
}

#[test]
fn progress_clamps_overshoot() {
    let below = ScrollMetrics::new(-120.0, 3000.0, 1000.0);
    let above = ScrollMetrics::new(2600.0, 3000.0, 1000.0);
    assert_eq!(ScrollProgress::from_metrics(&below), ScrollProgress::START);
    assert_eq!(ScrollProgress::from_metrics(&above), ScrollProgress::END);
}

#[test]
fn short_and_empty_documents_stay_in_range() {
    // document shorter than the viewport
    let short = ScrollMetrics::new(0.0, 400.0, 900.0);
    assert_eq!(short.scrollable(), 1.0);
    assert_eq!(ScrollProgress::from_metrics(&short).get(), 0.0);

    let empty = ScrollMetrics::default();
    assert_eq!(ScrollProgress::from_metrics(&empty).get(), 0.0);

    let unmeasured = ScrollMetrics::new(10.0, f32::NAN, 900.0);
    let p = ScrollProgress::from_metrics(&unmeasured).get();
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn nan_ratio_collapses_to_start() {
    assert_eq!(ScrollProgress::from_ratio(f32::NAN), ScrollProgress::START);
    assert_eq!(ScrollProgress::from_ratio(f32::INFINITY), ScrollProgress::END);
    assert_eq!(ScrollProgress::from_ratio(f32::NEG_INFINITY), ScrollProgress::START);
}

#[test]
fn progress_is_non_decreasing_in_offset() {
    let mut prev = -1.0;
    for step in 0..=200 {
        let y = step as f32 * 25.0 - 500.0;
        let p = ScrollProgress::from_metrics(&ScrollMetrics::new(y, 4000.0, 900.0)).get();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn turns_map_full_page_to_one_revolution() {
    assert_eq!(ScrollProgress::START.turns(), 0.0);
    assert!((ScrollProgress::END.turns() - std::f32::consts::TAU).abs() < 1e-6);
}

#[test]
fn tracker_reports_changes_and_derived_values() {
    let mut t = ScrollTracker::new();
    assert_eq!(t.samples(), 0);

    // the first sample always counts as a change, even at the top
    assert!(t.sample(ScrollMetrics::new(0.0, 2000.0, 1000.0)));
    assert!(!t.sample(ScrollMetrics::new(0.0, 2000.0, 1000.0)));
    assert!(t.sample(ScrollMetrics::new(500.0, 2000.0, 1000.0)));
    assert_eq!(t.samples(), 3);

    assert!((t.progress().get() - 0.5).abs() < 1e-6);
    assert!((t.progress_percent() - 50.0).abs() < 1e-4);
    assert!((t.indicator_degrees() - 180.0).abs() < 1e-4);
    assert_eq!(t.metrics().scroll_y, 500.0);
}
