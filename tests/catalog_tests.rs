// Host-side tests for the static catalog and load bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod catalog {
    include!("../src/core/catalog.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}

use assets::*;
use catalog::*;

#[test]
fn catalog_sizes() {
    assert_eq!(CHARACTERS.len(), 15);
    assert_eq!(SAGAS.len(), 4);
    assert!(CHARACTERS.iter().all(|c| c.has_image()));
    assert!(CHARACTERS.iter().all(|c| c.image_ref.starts_with("assets/")));
    assert!(SAGAS.iter().all(|s| !s.has_image()));
}

#[test]
fn character_names_are_unique() {
    let mut names: Vec<&str> = CHARACTERS.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), CHARACTERS.len());
}

#[test]
fn saga_episode_ranges_are_contiguous() {
    let mut expected_start = 1;
    for saga in SAGAS.iter() {
        let (a, b) = saga
            .display_power
            .split_once('-')
            .expect("episode range");
        let a: u32 = a.parse().expect("start");
        let b: u32 = b.parse().expect("end");
        assert_eq!(a, expected_start, "{}", saga.name);
        assert!(b > a);
        expected_start = b + 1;
    }
    assert_eq!(expected_start, 292);
}

#[test]
fn colour_tags_render_css_gradients() {
    assert_eq!(
        ColorTag::OrangeRed.css_gradient(),
        "linear-gradient(135deg, #f97316, #ef4444)"
    );
    let rgb = ColorTag::BlackGrey.primary_rgb();
    assert_eq!(rgb, [0.0, 0.0, 0.0]);
}

#[test]
fn saga_selector_ignores_invalid_and_repeat_selection() {
    let mut sel = SagaSelector::new();
    assert_eq!(sel.active_index(), 0);
    assert_eq!(sel.active().name, "Saiyan Saga");

    assert!(!sel.select(0));
    assert!(!sel.select(4));
    assert!(!sel.select(usize::MAX));
    assert_eq!(sel.active_index(), 0);

    assert!(sel.select(2));
    assert_eq!(sel.active().name, "Cell Saga");
}

#[test]
fn loader_percent_is_monotonic_and_completes_with_failures() {
    let mut t = AssetTracker::new();
    assert_eq!(t.progress_percent(), 100.0);
    assert!(t.is_complete());

    for c in CHARACTERS.iter() {
        assert!(t.register(c.image_ref));
    }
    assert!(!t.register(CHARACTERS[0].image_ref));
    assert_eq!(t.total(), 15);
    assert_eq!(t.progress_percent(), 0.0);
    assert_eq!(t.label(), "0% loaded");

    let mut prev = 0.0;
    for (i, c) in CHARACTERS.iter().enumerate() {
        let settled = if i % 4 == 0 {
            t.mark_failed(c.image_ref)
        } else {
            t.mark_loaded(c.image_ref)
        };
        assert!(settled);
        let p = t.progress_percent();
        assert!(p >= prev);
        prev = p;
    }
    assert!(t.is_complete());
    assert_eq!(t.progress_percent(), 100.0);
    assert_eq!(t.label(), "100% loaded");
    assert_eq!(t.failed(), 4);
    assert_eq!(t.loaded(), 11);
}

#[test]
fn assets_settle_once() {
    let mut t = AssetTracker::new();
    t.register("a.png");
    t.register("b.png");
    assert!(t.mark_loaded("a.png"));
    assert!(!t.mark_loaded("a.png"));
    assert!(!t.mark_failed("a.png"));
    assert!(!t.mark_loaded("unknown.png"));
    assert_eq!(t.status("a.png"), Some(AssetStatus::Loaded));
    assert_eq!(t.status("b.png"), Some(AssetStatus::Pending));
    assert!(!AssetStatus::Pending.is_settled());
    assert_eq!(t.label(), "50% loaded");
}
