// Static display records for the gallery and the saga selector.

/// Card gradient family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorTag {
    OrangeRed,
    BluePurple,
    PurplePink,
    DeepPurplePink,
    LimeGreen,
    BlackGrey,
    PurpleIndigo,
    BlueCyan,
    GreenLime,
    YellowLight,
    OrangeYellow,
    YellowBlue,
    CyanYellow,
    YellowOrange,
    Red,
    Purple,
    Green,
    Pink,
}

impl ColorTag {
    /// Gradient stops as `0xRRGGBB`.
    pub fn stops(self) -> (u32, u32) {
        match self {
            ColorTag::OrangeRed => (0xF97316, 0xEF4444),
            ColorTag::BluePurple => (0x3B82F6, 0xA855F7),
            ColorTag::PurplePink => (0xA855F7, 0xEC4899),
            ColorTag::DeepPurplePink => (0x9333EA, 0xDB2777),
            ColorTag::LimeGreen => (0x65A30D, 0x16A34A),
            ColorTag::BlackGrey => (0x000000, 0x4B5563),
            ColorTag::PurpleIndigo => (0xA855F7, 0x4F46E5),
            ColorTag::BlueCyan => (0x3B82F6, 0x0891B2),
            ColorTag::GreenLime => (0x16A34A, 0x65A30D),
            ColorTag::YellowLight => (0xCA8A04, 0xFDE047),
            ColorTag::OrangeYellow => (0xEA580C, 0xCA8A04),
            ColorTag::YellowBlue => (0xCA8A04, 0x2563EB),
            ColorTag::CyanYellow => (0x0891B2, 0xCA8A04),
            ColorTag::YellowOrange => (0xCA8A04, 0xEA580C),
            ColorTag::Red => (0x7F1D1D, 0x7C2D12),
            ColorTag::Purple => (0x581C87, 0x1E3A8A),
            ColorTag::Green => (0x14532D, 0x134E4A),
            ColorTag::Pink => (0x831843, 0x7C2D12),
        }
    }

    pub fn css_gradient(self) -> String {
        let (a, b) = self.stops();
        format!("linear-gradient(135deg, #{:06x}, #{:06x})", a, b)
    }

    /// Tint of the card body in the 3D viewer.
    pub fn primary_rgb(self) -> [f32; 3] {
        let (a, _) = self.stops();
        [
            ((a >> 16) & 0xff) as f32 / 255.0,
            ((a >> 8) & 0xff) as f32 / 255.0,
            (a & 0xff) as f32 / 255.0,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: &'static str,
    /// Relative image path; empty for records without artwork.
    pub image_ref: &'static str,
    pub description: &'static str,
    /// Power badge for characters, episode range for sagas.
    pub display_power: &'static str,
    pub color_tag: ColorTag,
    pub tags: &'static [&'static str],
}

impl Entity {
    pub fn has_image(&self) -> bool {
        !self.image_ref.is_empty()
    }
}

const LATE_FORMS: &[&str] = &["1st Form", "2nd Form", "3rd Form", "Final Form", "Golden"];

pub static CHARACTERS: [Entity; 15] = [
    Entity {
        name: "Goku",
        image_ref: "assets/Goku.jpeg",
        description: "The Saiyan warrior who protects Earth",
        display_power: "Super Saiyan God SS",
        color_tag: ColorTag::OrangeRed,
        tags: &["Base", "Super Saiyan", "SS2", "SS3", "SSG", "SSB"],
    },
    Entity {
        name: "Vegeta",
        image_ref: "assets/Z Fighters (@DragonBall43ver) on X.jpeg",
        description: "Prince of all Saiyans",
        display_power: "Super Saiyan Blue",
        color_tag: ColorTag::BluePurple,
        tags: &["Base", "Super Saiyan", "SS2", "SSG", "SSB", "SSBE"],
    },
    Entity {
        name: "Gohan",
        image_ref: "assets/Gohan.jpeg",
        description: "The hidden power of the Saiyans",
        display_power: "Ultimate Gohan",
        color_tag: ColorTag::PurplePink,
        tags: &["Base", "Super Saiyan", "SS2", "Ultimate", "Beast"],
    },
    Entity {
        name: "Frieza",
        image_ref: "assets/Frieza - Phone Wallpaper Fan Art.jpeg",
        description: "Emperor of the universe",
        display_power: "Golden Frieza",
        color_tag: ColorTag::DeepPurplePink,
        tags: &["1st Form", "2nd Form", "3rd Form", "Final Form", "Golden"],
    },
    Entity {
        name: "Broly",
        image_ref: "assets/broly.jpeg",
        description: "Most powerful saiyan",
        display_power: "Green Broly",
        color_tag: ColorTag::LimeGreen,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Black Goku",
        image_ref: "assets/blakgoku.jpeg",
        description: "Duplicate Goku",
        display_power: "Black Goku",
        color_tag: ColorTag::BlackGrey,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Trunks",
        image_ref: "assets/trunk.jpeg",
        description: "Sword of Trunks",
        display_power: "Trunks",
        color_tag: ColorTag::PurpleIndigo,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Vegito",
        image_ref: "assets/vegito.jpeg",
        description: "Goku and Vegeta",
        display_power: "Vegito",
        color_tag: ColorTag::BlueCyan,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Piccolo",
        image_ref: "assets/Piccolo.jpeg",
        description: "Master Piccolo",
        display_power: "Piccolo",
        color_tag: ColorTag::GreenLime,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Goten",
        image_ref: "assets/goten.jpeg",
        description: "Little Goku",
        display_power: "Goten",
        color_tag: ColorTag::YellowLight,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Goten and Trunks",
        image_ref: "assets/gotentrunk.jpeg",
        description: "Combo of Goten and Trunks",
        display_power: "Super Goten Trunks",
        color_tag: ColorTag::OrangeYellow,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Cell",
        image_ref: "assets/celldbz.jpeg",
        description: "Super Saiyan Cell",
        display_power: "Cell",
        color_tag: ColorTag::GreenLime,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Android 18",
        image_ref: "assets/android.jpeg",
        description: "Android 18",
        display_power: "Android 18",
        color_tag: ColorTag::YellowBlue,
        tags: LATE_FORMS,
    },
    Entity {
        name: "Bulma",
        image_ref: "assets/bulma.jpeg",
        description: "Pretty Bulma",
        display_power: "Bulma",
        color_tag: ColorTag::CyanYellow,
        tags: LATE_FORMS,
    },
    Entity {
        name: "The Ultimate",
        image_ref: "assets/gokuvegita.jpeg",
        description: "Most powerful combo",
        display_power: "Deadly",
        color_tag: ColorTag::YellowOrange,
        tags: LATE_FORMS,
    },
];

pub static SAGAS: [Entity; 4] = [
    Entity {
        name: "Saiyan Saga",
        image_ref: "",
        description: "The arrival of Raditz and the beginning of the Z era",
        display_power: "1-39",
        color_tag: ColorTag::Red,
        tags: &[],
    },
    Entity {
        name: "Frieza Saga",
        image_ref: "",
        description: "The journey to Namek and battle against the tyrant Frieza",
        display_power: "40-107",
        color_tag: ColorTag::Purple,
        tags: &[],
    },
    Entity {
        name: "Cell Saga",
        image_ref: "",
        description: "The Androids appear and the Cell Games begin",
        display_power: "108-194",
        color_tag: ColorTag::Green,
        tags: &[],
    },
    Entity {
        name: "Majin Buu Saga",
        image_ref: "",
        description: "The ultimate battle against the magical menace Majin Buu",
        display_power: "195-291",
        color_tag: ColorTag::Pink,
        tags: &[],
    },
];

/// One active saga out of [`SAGAS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SagaSelector {
    active: usize,
}

impl SagaSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range indices are ignored. Returns true when the selection
    /// changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= SAGAS.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &'static Entity {
        &SAGAS[self.active]
    }
}
