// Derived display values for the scrollable HTML sections.

use super::constants::*;
use fnv::FnvHashSet;

/// Viewport-relative bounding box of a section, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// How far the section has scrolled up past the viewport top, 0..=1.
    pub fn exit_progress(&self) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        clamp01(-self.top / self.height)
    }

    /// Fraction of the section's own height inside `[0, viewport_height]`.
    pub fn intersection_ratio(&self, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom().min(viewport_height) - self.top.max(0.0);
        clamp01(visible / self.height)
    }
}

#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

// ---------------- Hero ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for HeroStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

pub fn hero_opacity(progress: f32) -> f32 {
    clamp01(1.0 - progress * HERO_FADE_RATE)
}

pub fn hero_scale(progress: f32) -> f32 {
    (1.0 - progress * HERO_SHRINK_RATE).clamp(HERO_MIN_SCALE, 1.0)
}

pub fn hero_style(progress: f32) -> HeroStyle {
    HeroStyle {
        opacity: hero_opacity(progress),
        scale: hero_scale(progress),
    }
}

pub fn hero_style_for(rect: &SectionRect) -> HeroStyle {
    hero_style(rect.exit_progress())
}

// ---------------- Power level ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Base,
    SuperSaiyan,
    SuperSaiyan3,
    SuperSaiyanGod,
}

impl Tier {
    /// Strictly-above thresholds; a level equal to a threshold stays below.
    pub fn for_level(level: u32) -> Tier {
        if level > TIER_GOD_ABOVE {
            Tier::SuperSaiyanGod
        } else if level > TIER_SS3_ABOVE {
            Tier::SuperSaiyan3
        } else if level > TIER_SS_ABOVE {
            Tier::SuperSaiyan
        } else {
            Tier::Base
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Base => "Base Form",
            Tier::SuperSaiyan => "Super Saiyan",
            Tier::SuperSaiyan3 => "Super Saiyan 3",
            Tier::SuperSaiyanGod => "Super Saiyan God",
        }
    }
}

/// How much of the section has travelled through the viewport.
pub fn visible_ratio(rect: &SectionRect, viewport_height: f32) -> f32 {
    let denom = viewport_height + rect.height;
    if denom <= 0.0 {
        return 0.0;
    }
    clamp01((viewport_height - rect.top) / denom)
}

pub fn power_level(visible_ratio: f32) -> u32 {
    (clamp01(visible_ratio) * POWER_LEVEL_MAX as f32).floor() as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerReadout {
    pub level: u32,
    pub tier: Tier,
}

impl PowerReadout {
    pub fn from_level(level: u32) -> Self {
        let level = level.min(POWER_LEVEL_MAX);
        Self {
            level,
            tier: Tier::for_level(level),
        }
    }

    pub fn for_section(rect: &SectionRect, viewport_height: f32) -> Self {
        Self::from_level(power_level(visible_ratio(rect, viewport_height)))
    }

    pub fn status(&self) -> &'static str {
        if self.level > TIER_SS_ABOVE {
            "OVER 9000!!!"
        } else {
            "Normal"
        }
    }

    /// Width of the power bar, 0..=100.
    pub fn bar_percent(&self) -> f32 {
        self.level as f32 / POWER_LEVEL_MAX as f32 * 100.0
    }

    pub fn formatted(&self) -> String {
        format_thousands(self.level)
    }
}

/// en-US digit grouping: `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------- Gallery reveal ----------------

/// Cards fade in once enough of them has entered the viewport and stay
/// revealed afterwards.
#[derive(Clone, Debug, Default)]
pub struct GalleryReveal {
    revealed: FnvHashSet<usize>,
}

impl GalleryReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the card became visible on this observation.
    pub fn observe(&mut self, index: usize, rect: &SectionRect, viewport_height: f32) -> bool {
        if self.revealed.contains(&index) {
            return false;
        }
        if rect.intersection_ratio(viewport_height) >= CARD_REVEAL_THRESHOLD {
            self.revealed.insert(index);
            return true;
        }
        false
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }
}
