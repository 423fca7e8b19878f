//! The fixed table of well-known colors.
//!
//! Indices 1..=26 and 168..=174 are system colors (UI element colors such as
//! `Window` or `Highlight`); everything else is an ordinary named color.
//! System colors carry static light-theme defaults.

use std::fmt;

/// Palette grouping of a [`KnownColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownColorCategory {
    /// UI element colors, plus `Transparent`.
    System,
    /// The basic named colors (`Red`, `Navy`, `Silver`, ...).
    Standard,
    /// Every other web color.
    Web,
}

struct Entry {
    color: KnownColor,
    name: &'static str,
    argb: u32,
}

macro_rules! known_colors {
    ($($name:ident = $index:literal => $argb:literal,)+) => {
        /// A color identified by its index in the well-known color table.
        ///
        /// Discriminants are stable and start at 1.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum KnownColor {
            $($name = $index,)+
        }

        impl KnownColor {
            /// Every known color, in index order.
            pub const ALL: &'static [KnownColor] = &[$(KnownColor::$name,)+];
        }

        const TABLE: &[Entry] = &[
            $(Entry { color: KnownColor::$name, name: stringify!($name), argb: $argb },)+
        ];
    };
}

known_colors! {
    // system colors
    ActiveBorder = 1 => 0xFFB4_B4B4,
    ActiveCaption = 2 => 0xFF99_B4D1,
    ActiveCaptionText = 3 => 0xFF00_0000,
    AppWorkspace = 4 => 0xFFAB_ABAB,
    Control = 5 => 0xFFF0_F0F0,
    ControlDark = 6 => 0xFFA0_A0A0,
    ControlDarkDark = 7 => 0xFF69_6969,
    ControlLight = 8 => 0xFFE3_E3E3,
    ControlLightLight = 9 => 0xFFFF_FFFF,
    ControlText = 10 => 0xFF00_0000,
    Desktop = 11 => 0xFF00_0000,
    GrayText = 12 => 0xFF6D_6D6D,
    Highlight = 13 => 0xFF33_99FF,
    HighlightText = 14 => 0xFFFF_FFFF,
    HotTrack = 15 => 0xFF00_66CC,
    InactiveBorder = 16 => 0xFFF4_F7FC,
    InactiveCaption = 17 => 0xFFBF_CDDB,
    InactiveCaptionText = 18 => 0xFF00_0000,
    Info = 19 => 0xFFFF_FFE1,
    InfoText = 20 => 0xFF00_0000,
    Menu = 21 => 0xFFF0_F0F0,
    MenuText = 22 => 0xFF00_0000,
    ScrollBar = 23 => 0xFFC8_C8C8,
    Window = 24 => 0xFFFF_FFFF,
    WindowFrame = 25 => 0xFF64_6464,
    WindowText = 26 => 0xFF00_0000,

    // web colors
    Transparent = 27 => 0x00FF_FFFF,
    AliceBlue = 28 => 0xFFF0_F8FF,
    AntiqueWhite = 29 => 0xFFFA_EBD7,
    Aqua = 30 => 0xFF00_FFFF,
    Aquamarine = 31 => 0xFF7F_FFD4,
    Azure = 32 => 0xFFF0_FFFF,
    Beige = 33 => 0xFFF5_F5DC,
    Bisque = 34 => 0xFFFF_E4C4,
    Black = 35 => 0xFF00_0000,
    BlanchedAlmond = 36 => 0xFFFF_EBCD,
    Blue = 37 => 0xFF00_00FF,
    BlueViolet = 38 => 0xFF8A_2BE2,
    Brown = 39 => 0xFFA5_2A2A,
    BurlyWood = 40 => 0xFFDE_B887,
    CadetBlue = 41 => 0xFF5F_9EA0,
    Chartreuse = 42 => 0xFF7F_FF00,
    Chocolate = 43 => 0xFFD2_691E,
    Coral = 44 => 0xFFFF_7F50,
    CornflowerBlue = 45 => 0xFF64_95ED,
    Cornsilk = 46 => 0xFFFF_F8DC,
    Crimson = 47 => 0xFFDC_143C,
    Cyan = 48 => 0xFF00_FFFF,
    DarkBlue = 49 => 0xFF00_008B,
    DarkCyan = 50 => 0xFF00_8B8B,
    DarkGoldenrod = 51 => 0xFFB8_860B,
    DarkGray = 52 => 0xFFA9_A9A9,
    DarkGreen = 53 => 0xFF00_6400,
    DarkKhaki = 54 => 0xFFBD_B76B,
    DarkMagenta = 55 => 0xFF8B_008B,
    DarkOliveGreen = 56 => 0xFF55_6B2F,
    DarkOrange = 57 => 0xFFFF_8C00,
    DarkOrchid = 58 => 0xFF99_32CC,
    DarkRed = 59 => 0xFF8B_0000,
    DarkSalmon = 60 => 0xFFE9_967A,
    DarkSeaGreen = 61 => 0xFF8F_BC8B,
    DarkSlateBlue = 62 => 0xFF48_3D8B,
    DarkSlateGray = 63 => 0xFF2F_4F4F,
    DarkTurquoise = 64 => 0xFF00_CED1,
    DarkViolet = 65 => 0xFF94_00D3,
    DeepPink = 66 => 0xFFFF_1493,
    DeepSkyBlue = 67 => 0xFF00_BFFF,
    DimGray = 68 => 0xFF69_6969,
    DodgerBlue = 69 => 0xFF1E_90FF,
    Firebrick = 70 => 0xFFB2_2222,
    FloralWhite = 71 => 0xFFFF_FAF0,
    ForestGreen = 72 => 0xFF22_8B22,
    Fuchsia = 73 => 0xFFFF_00FF,
    Gainsboro = 74 => 0xFFDC_DCDC,
    GhostWhite = 75 => 0xFFF8_F8FF,
    Gold = 76 => 0xFFFF_D700,
    Goldenrod = 77 => 0xFFDA_A520,
    Gray = 78 => 0xFF80_8080,
    Green = 79 => 0xFF00_8000,
    GreenYellow = 80 => 0xFFAD_FF2F,
    Honeydew = 81 => 0xFFF0_FFF0,
    HotPink = 82 => 0xFFFF_69B4,
    IndianRed = 83 => 0xFFCD_5C5C,
    Indigo = 84 => 0xFF4B_0082,
    Ivory = 85 => 0xFFFF_FFF0,
    Khaki = 86 => 0xFFF0_E68C,
    Lavender = 87 => 0xFFE6_E6FA,
    LavenderBlush = 88 => 0xFFFF_F0F5,
    LawnGreen = 89 => 0xFF7C_FC00,
    LemonChiffon = 90 => 0xFFFF_FACD,
    LightBlue = 91 => 0xFFAD_D8E6,
    LightCoral = 92 => 0xFFF0_8080,
    LightCyan = 93 => 0xFFE0_FFFF,
    LightGoldenrodYellow = 94 => 0xFFFA_FAD2,
    LightGray = 95 => 0xFFD3_D3D3,
    LightGreen = 96 => 0xFF90_EE90,
    LightPink = 97 => 0xFFFF_B6C1,
    LightSalmon = 98 => 0xFFFF_A07A,
    LightSeaGreen = 99 => 0xFF20_B2AA,
    LightSkyBlue = 100 => 0xFF87_CEFA,
    LightSlateGray = 101 => 0xFF77_8899,
    LightSteelBlue = 102 => 0xFFB0_C4DE,
    LightYellow = 103 => 0xFFFF_FFE0,
    Lime = 104 => 0xFF00_FF00,
    LimeGreen = 105 => 0xFF32_CD32,
    Linen = 106 => 0xFFFA_F0E6,
    Magenta = 107 => 0xFFFF_00FF,
    Maroon = 108 => 0xFF80_0000,
    MediumAquamarine = 109 => 0xFF66_CDAA,
    MediumBlue = 110 => 0xFF00_00CD,
    MediumOrchid = 111 => 0xFFBA_55D3,
    MediumPurple = 112 => 0xFF93_70DB,
    MediumSeaGreen = 113 => 0xFF3C_B371,
    MediumSlateBlue = 114 => 0xFF7B_68EE,
    MediumSpringGreen = 115 => 0xFF00_FA9A,
    MediumTurquoise = 116 => 0xFF48_D1CC,
    MediumVioletRed = 117 => 0xFFC7_1585,
    MidnightBlue = 118 => 0xFF19_1970,
    MintCream = 119 => 0xFFF5_FFFA,
    MistyRose = 120 => 0xFFFF_E4E1,
    Moccasin = 121 => 0xFFFF_E4B5,
    NavajoWhite = 122 => 0xFFFF_DEAD,
    Navy = 123 => 0xFF00_0080,
    OldLace = 124 => 0xFFFD_F5E6,
    Olive = 125 => 0xFF80_8000,
    OliveDrab = 126 => 0xFF6B_8E23,
    Orange = 127 => 0xFFFF_A500,
    OrangeRed = 128 => 0xFFFF_4500,
    Orchid = 129 => 0xFFDA_70D6,
    PaleGoldenrod = 130 => 0xFFEE_E8AA,
    PaleGreen = 131 => 0xFF98_FB98,
    PaleTurquoise = 132 => 0xFFAF_EEEE,
    PaleVioletRed = 133 => 0xFFDB_7093,
    PapayaWhip = 134 => 0xFFFF_EFD5,
    PeachPuff = 135 => 0xFFFF_DAB9,
    Peru = 136 => 0xFFCD_853F,
    Pink = 137 => 0xFFFF_C0CB,
    Plum = 138 => 0xFFDD_A0DD,
    PowderBlue = 139 => 0xFFB0_E0E6,
    Purple = 140 => 0xFF80_0080,
    Red = 141 => 0xFFFF_0000,
    RosyBrown = 142 => 0xFFBC_8F8F,
    RoyalBlue = 143 => 0xFF41_69E1,
    SaddleBrown = 144 => 0xFF8B_4513,
    Salmon = 145 => 0xFFFA_8072,
    SandyBrown = 146 => 0xFFF4_A460,
    SeaGreen = 147 => 0xFF2E_8B57,
    SeaShell = 148 => 0xFFFF_F5EE,
    Sienna = 149 => 0xFFA0_522D,
    Silver = 150 => 0xFFC0_C0C0,
    SkyBlue = 151 => 0xFF87_CEEB,
    SlateBlue = 152 => 0xFF6A_5ACD,
    SlateGray = 153 => 0xFF70_8090,
    Snow = 154 => 0xFFFF_FAFA,
    SpringGreen = 155 => 0xFF00_FF7F,
    SteelBlue = 156 => 0xFF46_82B4,
    Tan = 157 => 0xFFD2_B48C,
    Teal = 158 => 0xFF00_8080,
    Thistle = 159 => 0xFFD8_BFD8,
    Tomato = 160 => 0xFFFF_6347,
    Turquoise = 161 => 0xFF40_E0D0,
    Violet = 162 => 0xFFEE_82EE,
    Wheat = 163 => 0xFFF5_DEB3,
    White = 164 => 0xFFFF_FFFF,
    WhiteSmoke = 165 => 0xFFF5_F5F5,
    Yellow = 166 => 0xFFFF_FF00,
    YellowGreen = 167 => 0xFF9A_CD32,

    // system colors added later
    ButtonFace = 168 => 0xFFF0_F0F0,
    ButtonHighlight = 169 => 0xFFFF_FFFF,
    ButtonShadow = 170 => 0xFFA0_A0A0,
    GradientActiveCaption = 171 => 0xFFB9_D1EA,
    GradientInactiveCaption = 172 => 0xFFD7_E4F2,
    MenuBar = 173 => 0xFFF0_F0F0,
    MenuHighlight = 174 => 0xFF33_99FF,

    // web
    RebeccaPurple = 175 => 0xFF66_3399,
}

impl KnownColor {
    /// Number of entries; valid indices are `1..=COUNT`.
    pub const COUNT: usize = TABLE.len();

    pub const fn index(self) -> i32 {
        self as i32
    }

    /// The color at `index`, if it is in `1..=COUNT`.
    pub fn from_index(index: i32) -> Option<KnownColor> {
        let slot = usize::try_from(index).ok()?.checked_sub(1)?;
        TABLE.get(slot).map(|entry| entry.color)
    }

    fn entry(self) -> &'static Entry {
        // TABLE is laid out in discriminant order
        &TABLE[self as usize - 1]
    }

    /// The canonical name, e.g. `"AliceBlue"`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Packed `0xAARRGGBB` value.
    pub fn argb(self) -> u32 {
        self.entry().argb
    }

    pub fn is_system(self) -> bool {
        matches!(self as u8, 1..=26 | 168..=174)
    }

    /// `Transparent` is grouped with the system colors here even though
    /// [`KnownColor::is_system`] is false for it.
    pub fn category(self) -> KnownColorCategory {
        use KnownColor::*;
        match self {
            _ if self.is_system() => KnownColorCategory::System,
            Transparent => KnownColorCategory::System,
            Aqua | Black | Blue | Brown | Fuchsia | Gray | Green | Lime | Maroon | Navy
            | Olive | Orange | Purple | Red | Silver | Teal | White | Yellow => {
                KnownColorCategory::Standard
            }
            _ => KnownColorCategory::Web,
        }
    }

    /// Case-insensitive name lookup. Ordinary colors are searched before
    /// system colors.
    pub fn from_name(name: &str) -> Option<KnownColor> {
        let ordinary = Self::ALL.iter().filter(|c| !c.is_system());
        let system = Self::ALL.iter().filter(|c| c.is_system());
        ordinary
            .chain(system)
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// The first ordinary color (in index order) with exactly this value.
    pub(crate) fn ordinary_with_argb(argb: u32) -> Option<KnownColor> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| !c.is_system() && c.argb() == argb)
    }
}

impl fmt::Display for KnownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
