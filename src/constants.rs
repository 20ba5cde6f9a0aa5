// Rendering and page wiring constants for the web frontend.
//
// Numeric behaviour (scroll mapping, animation curves) lives in
// `core/constants.rs`; this file only covers how things are drawn and
// which DOM nodes they attach to.

// Clear colours (linear, opaque)
pub const BG_CLEAR: [f64; 3] = [0.0, 0.0, 0.012];
pub const VIEWER_CLEAR: [f64; 3] = [0.01, 0.01, 0.015];

// Instance buffer grows in steps of this many mesh instances
pub const INSTANCE_CHUNK: usize = 128;

// Starfield sprite scale relative to `StarfieldParams::size_factor`
pub const STAR_SPRITE_SCALE: f32 = 0.15;
pub const STAR_TWINKLE: f32 = 1.0;

// Canvas ids
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const VIEWER_CANVAS_ID: &str = "viewer-canvas";

// Sections
pub const HERO_ID: &str = "hero";
pub const POWER_SECTION_ID: &str = "power-level";
pub const POWER_VALUE_ID: &str = "power-value";
pub const POWER_BAR_ID: &str = "power-bar";
pub const POWER_BATTLE_ID: &str = "power-battle";
pub const POWER_STATUS_ID: &str = "power-status";
pub const POWER_TIER_ID: &str = "power-tier";
pub const GALLERY_ID: &str = "gallery";
pub const SAGA_BUTTONS_ID: &str = "saga-buttons";
pub const SAGA_TITLE_ID: &str = "saga-title";
pub const SAGA_DESC_ID: &str = "saga-desc";
pub const SAGA_EPISODES_ID: &str = "saga-episodes";
pub const SAGA_PREVIEW_ID: &str = "saga-preview";

// Fixed chrome
pub const PROGRESS_FILL_ID: &str = "scroll-progress-fill";
pub const INDICATOR_RING_ID: &str = "scroll-indicator-ring";
pub const LOADER_ID: &str = "loader";
pub const LOADER_TEXT_ID: &str = "loader-text";

// Viewer modal
pub const VIEWER_ID: &str = "viewer";
pub const VIEWER_NAME_ID: &str = "viewer-name";
pub const VIEWER_POWER_ID: &str = "viewer-power";
pub const VIEWER_LOADER_ID: &str = "viewer-loader";
pub const VIEWER_CLOSE_ID: &str = "viewer-close";
pub const VIEWER_LEFT_ID: &str = "viewer-left";
pub const VIEWER_AUTO_ID: &str = "viewer-auto";
pub const VIEWER_RIGHT_ID: &str = "viewer-right";
