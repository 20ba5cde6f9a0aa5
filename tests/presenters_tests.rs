// Host-side tests for the section presenters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod presenters {
    include!("../src/core/presenters.rs");
}

use presenters::*;

#[test]
fn tiers_use_strict_thresholds() {
    assert_eq!(Tier::for_level(0), Tier::Base);
    assert_eq!(Tier::for_level(9_000), Tier::Base);
    assert_eq!(Tier::for_level(9_001), Tier::SuperSaiyan);
    assert_eq!(Tier::for_level(150_000), Tier::SuperSaiyan);
    assert_eq!(Tier::for_level(150_001), Tier::SuperSaiyan3);
    assert_eq!(Tier::for_level(500_000), Tier::SuperSaiyan3);
    assert_eq!(Tier::for_level(500_001), Tier::SuperSaiyanGod);
    assert_eq!(Tier::for_level(1_000_000), Tier::SuperSaiyanGod);
}

#[test]
fn tier_labels() {
    assert_eq!(Tier::Base.label(), "Base Form");
    assert_eq!(Tier::SuperSaiyan.label(), "Super Saiyan");
    assert_eq!(Tier::SuperSaiyan3.label(), "Super Saiyan 3");
    assert_eq!(Tier::SuperSaiyanGod.label(), "Super Saiyan God");
}

#[test]
fn hero_opacity_fades_and_never_goes_negative() {
    assert_eq!(hero_opacity(0.0), 1.0);
    assert!((hero_opacity(0.5) - 0.25).abs() < 1e-6);
    assert!(hero_opacity(2.0 / 3.0).abs() < 1e-6);
    assert_eq!(hero_opacity(0.9), 0.0);
    assert_eq!(hero_opacity(5.0), 0.0);
    assert_eq!(hero_opacity(-1.0), 1.0);
}

#[test]
fn hero_scale_is_bounded() {
    assert_eq!(hero_scale(0.0), 1.0);
    assert!((hero_scale(0.5) - 0.9).abs() < 1e-6);
    assert!((hero_scale(1.0) - 0.8).abs() < 1e-6);
    assert!((hero_scale(3.0) - 0.8).abs() < 1e-6);
}

#[test]
fn hero_style_follows_section_exit() {
    // section still at the top of the viewport
    let top = hero_style_for(&SectionRect::new(0.0, 800.0));
    assert_eq!(top, HeroStyle::default());

    let half = hero_style_for(&SectionRect::new(-400.0, 800.0));
    assert!((half.opacity - 0.25).abs() < 1e-6);
    assert!((half.scale - 0.9).abs() < 1e-6);

    // zero-height sections never divide by zero
    assert_eq!(SectionRect::new(-10.0, 0.0).exit_progress(), 0.0);
}

#[test]
fn power_level_tracks_section_travel() {
    let vh = 1000.0;
    // section just below the fold
    let below = PowerReadout::for_section(&SectionRect::new(1000.0, 1000.0), vh);
    assert_eq!(below.level, 0);
    assert_eq!(below.tier, Tier::Base);

    // halfway through
    let half = PowerReadout::for_section(&SectionRect::new(0.0, 1000.0), vh);
    assert_eq!(half.level, 500_000);
    assert_eq!(half.tier, Tier::SuperSaiyan3);

    // scrolled past
    let past = PowerReadout::for_section(&SectionRect::new(-1000.0, 1000.0), vh);
    assert_eq!(past.level, 1_000_000);
    assert_eq!(past.tier, Tier::SuperSaiyanGod);
    assert!((past.bar_percent() - 100.0).abs() < 1e-4);
}

#[test]
fn visible_ratio_is_clamped() {
    assert_eq!(visible_ratio(&SectionRect::new(5000.0, 100.0), 800.0), 0.0);
    assert_eq!(visible_ratio(&SectionRect::new(-5000.0, 100.0), 800.0), 1.0);
    assert_eq!(visible_ratio(&SectionRect::new(0.0, 0.0), 0.0), 0.0);
    assert_eq!(power_level(f32::NAN), 0);
}

#[test]
fn status_and_formatting() {
    let normal = PowerReadout::from_level(9_000);
    assert_eq!(normal.status(), "Normal");
    let over = PowerReadout::from_level(9_001);
    assert_eq!(over.status(), "OVER 9000!!!");
    assert_eq!(over.formatted(), "9,001");
    assert_eq!(PowerReadout::from_level(5_000_000).level, 1_000_000);

    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(150_001), "150,001");
    assert_eq!(format_thousands(1_000_000), "1,000,000");
}

#[test]
fn gallery_reveal_needs_thirty_percent_and_sticks() {
    let vh = 800.0;
    let mut reveal = GalleryReveal::new();

    // 20% of the card peeks in from the bottom
    assert!(!reveal.observe(0, &SectionRect::new(720.0, 400.0), vh));
    assert!(!reveal.is_revealed(0));

    // 40% visible
    assert!(reveal.observe(0, &SectionRect::new(640.0, 400.0), vh));
    assert!(reveal.is_revealed(0));

    // scrolled away again: stays revealed, no second notification
    assert!(!reveal.observe(0, &SectionRect::new(2000.0, 400.0), vh));
    assert!(reveal.is_revealed(0));
    assert!(!reveal.is_revealed(1));
}

#[test]
fn intersection_ratio_handles_partial_overlap() {
    let r = SectionRect::new(-100.0, 400.0);
    assert!((r.intersection_ratio(800.0) - 0.75).abs() < 1e-6);
    assert_eq!(SectionRect::new(900.0, 100.0).intersection_ratio(800.0), 0.0);
}
