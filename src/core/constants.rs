// Shared numeric tuning for scroll mapping and scene animation.

// Incremental animation constants are applied once per rendered frame.

// Camera rig
pub const CAMERA_BASE_DISTANCE: f32 = 15.0;
pub const CAMERA_SHRINK_DISTANCE: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Ornament scroll mapping
pub const ORNAMENT_BOB_AMPLITUDE: f32 = 0.5;

// Ornament pulses: (angular frequency, amplitude)
pub const CORE_PULSE: (f32, f32) = (3.0, 0.03);
pub const SHELL_PULSE: (f32, f32) = (2.0, 0.05);
pub const SHELL_OPACITY_BASE: f32 = 0.2;
pub const SHELL_OPACITY_SWING: f32 = 0.1;
pub const STAR_PULSE_FREQ: f32 = 5.0;
pub const STAR_SCALE_SWING: f32 = 0.2;
pub const STAR_EMISSIVE_BASE: f32 = 0.5;
pub const STAR_EMISSIVE_SWING: f32 = 0.5;

// Ring group spin, radians per frame on x/y/z
pub const RING_SPIN_PER_FRAME: [f32; 3] = [0.002, 0.003, 0.001];

// Floating orb drift, world units per frame
pub const ORB_JITTER_PER_FRAME: f32 = 0.001;

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_HALF_EXTENT: f32 = 15.0;
pub const PARTICLE_SPIN_PER_FRAME: f32 = 0.0005;

// Background stars
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_SPIN_PER_FRAME: f32 = 0.0001;

// Section presenters
pub const HERO_FADE_RATE: f32 = 1.5;
pub const HERO_SHRINK_RATE: f32 = 0.2;
pub const HERO_MIN_SCALE: f32 = 0.8;
pub const POWER_LEVEL_MAX: u32 = 1_000_000;
pub const TIER_GOD_ABOVE: u32 = 500_000;
pub const TIER_SS3_ABOVE: u32 = 150_000;
pub const TIER_SS_ABOVE: u32 = 9_000;
pub const CARD_REVEAL_THRESHOLD: f32 = 0.3;

// Character viewer
pub const VIEWER_CAMERA_Z: f32 = 6.0;
pub const VIEWER_BUTTON_STEP_RAD: f32 = 0.5;
// Matches an orbit control auto-rotate speed of 2 (one turn per 30 s)
pub const VIEWER_AUTO_ROTATE_RAD_PER_SEC: f32 = std::f32::consts::TAU / 30.0;
pub const CARD_HALF_EXTENTS: [f32; 3] = [1.5, 2.0, 0.1];
