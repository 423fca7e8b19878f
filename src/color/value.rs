use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::{ColorConverter, KnownColor, KnownColorCategory};
use crate::culture::Culture;
use crate::errors::ColorError;
use crate::log::debug;

const ALPHA_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

/// How a color was made. Equality and hashing look at this, not just at
/// the decoded components.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
enum Repr {
    #[default]
    Empty,
    Argb(u32),
    Known(KnownColor),
    Named(String),
}

/// An ARGB color that remembers how it was made.
///
/// A color is one of:
/// - empty ([`Color::EMPTY`]), a sentinel meaning "no color"
/// - an explicit packed ARGB value
/// - an entry of the [`KnownColor`] table
/// - an unresolved free-form name, whose components all read as zero
///
/// Two colors are equal only when they were made the same way:
/// `Color::from_argb_components(255, 0, 0, 0)` decodes to the same
/// components as [`Color::BLACK`] but is not equal to it, and hashes
/// differently.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    repr: Repr,
}

/// Hue, saturation and value, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Color {
    pub const EMPTY: Color = Color { repr: Repr::Empty };
    pub const TRANSPARENT: Color = Color::known(KnownColor::Transparent);
    pub const BLACK: Color = Color::known(KnownColor::Black);
    pub const WHITE: Color = Color::known(KnownColor::White);
    pub const RED: Color = Color::known(KnownColor::Red);
    pub const LIME: Color = Color::known(KnownColor::Lime);
    pub const BLUE: Color = Color::known(KnownColor::Blue);

    /// The table entry for `color`.
    pub const fn known(color: KnownColor) -> Color {
        Color {
            repr: Repr::Known(color),
        }
    }

    /// Wrap a packed `0xAARRGGBB` value as is.
    pub fn from_argb(argb: i32) -> Color {
        Color {
            repr: Repr::Argb(argb as u32),
        }
    }

    /// Pack four components, each of which must be in `0..=255`.
    pub fn from_argb_components(
        alpha: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<Color, ColorError> {
        let a = component("alpha", alpha)?;
        let r = component("red", red)?;
        let g = component("green", green)?;
        let b = component("blue", blue)?;
        Ok(Color {
            repr: Repr::Argb(pack(a, r, g, b)),
        })
    }

    /// Opaque color from three components.
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Result<Color, ColorError> {
        Color::from_argb_components(255, red, green, blue)
    }

    /// `base` with its alpha replaced.
    pub fn from_alpha(alpha: i32, base: &Color) -> Result<Color, ColorError> {
        let a = component("alpha", alpha)?;
        let value = base.value() & !(0xFF << ALPHA_SHIFT);
        Ok(Color {
            repr: Repr::Argb(value | (u32::from(a) << ALPHA_SHIFT)),
        })
    }

    pub fn from_known_color(color: KnownColor) -> Color {
        Color::known(color)
    }

    /// The known color at `index`. An index outside the table is not an
    /// error: the result is the color named after the number, as
    /// [`Color::from_name`] would build it.
    pub fn from_known_color_index(index: i32) -> Color {
        match KnownColor::from_index(index) {
            Some(color) => Color::known(color),
            None => {
                debug!(index, "known color index out of range, resolving by name");
                Color::from_name(&index.to_string())
            }
        }
    }

    /// Look `name` up among the known colors, ignoring case. An unknown
    /// name is kept as is; its components all read as zero.
    pub fn from_name(name: &str) -> Color {
        match KnownColor::from_name(name) {
            Some(color) => Color::known(color),
            None => {
                debug!(name, "unresolved color name");
                Color {
                    repr: Repr::Named(name.to_string()),
                }
            }
        }
    }

    /// Known colors of the given categories, sorted by name. An empty
    /// slice selects every category.
    pub fn known_colors(categories: &[KnownColorCategory]) -> Vec<Color> {
        let mut colors: Vec<Color> = KnownColor::ALL
            .iter()
            .copied()
            .filter(|c| categories.is_empty() || categories.contains(&c.category()))
            .map(Color::known)
            .collect();
        colors.sort_by(|a, b| a.name().cmp(&b.name()));
        colors
    }

    /// Opaque color from an HSV triple. Components are rounded half to
    /// even.
    pub fn from_hsv(hsv: Hsv) -> Color {
        let Hsv {
            hue,
            saturation: s,
            value: v,
        } = hsv;
        let (red, green, blue) = if s == 0.0 {
            (v, v, v)
        } else {
            let sector = hue * 6.0;
            let f = sector - sector.floor();
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));
            match sector.floor() as i32 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };
        let channel = |x: f64| (x * 255.0).round_ties_even() as u8;
        Color::opaque(channel(red), channel(green), channel(blue))
    }

    fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color {
            repr: Repr::Argb(pack(255, r, g, b)),
        }
    }

    /// Resolved packed value; zero for empty and unresolved colors.
    fn value(&self) -> u32 {
        match &self.repr {
            Repr::Argb(value) => *value,
            Repr::Known(color) => color.argb(),
            Repr::Empty | Repr::Named(_) => 0,
        }
    }

    pub fn a(&self) -> u8 {
        (self.value() >> ALPHA_SHIFT) as u8
    }

    pub fn r(&self) -> u8 {
        (self.value() >> RED_SHIFT) as u8
    }

    pub fn g(&self) -> u8 {
        (self.value() >> GREEN_SHIFT) as u8
    }

    pub fn b(&self) -> u8 {
        (self.value() >> BLUE_SHIFT) as u8
    }

    /// The resolved packed `0xAARRGGBB` value.
    pub fn to_argb(&self) -> i32 {
        self.value() as i32
    }

    pub fn is_empty(&self) -> bool {
        self.repr == Repr::Empty
    }

    pub fn is_known_color(&self) -> bool {
        matches!(self.repr, Repr::Known(_))
    }

    /// True for known colors and for colors made from a name.
    pub fn is_named_color(&self) -> bool {
        matches!(self.repr, Repr::Known(_) | Repr::Named(_))
    }

    pub fn is_system_color(&self) -> bool {
        matches!(self.repr, Repr::Known(color) if color.is_system())
    }

    pub fn to_known_color(&self) -> Option<KnownColor> {
        match self.repr {
            Repr::Known(color) => Some(color),
            _ => None,
        }
    }

    /// The explicit name, else the table name, else the value in lowercase
    /// hex (`"ffff0000"`, or `"0"` for the empty color).
    pub fn name(&self) -> Cow<'_, str> {
        match &self.repr {
            Repr::Named(name) => Cow::Borrowed(name.as_str()),
            Repr::Known(color) => Cow::Borrowed(color.name()),
            Repr::Argb(value) => Cow::Owned(format!("{value:x}")),
            Repr::Empty => Cow::Borrowed("0"),
        }
    }

    /// Compare resolved values only. `==` also looks at how the colors
    /// were made.
    pub fn equal_argb(&self, other: &Color) -> bool {
        self.value() == other.value()
    }

    /// HSP perceived brightness at or below the midpoint (127.5).
    pub fn is_dark(&self) -> bool {
        let (r, g, b) = self.rgb();
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
        let hsp = (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt();
        hsp <= 127.5
    }

    /// `bg + alpha * (fg - bg)`, clamped to `0..=255` and truncated.
    pub fn alpha_blend(fg: u8, bg: u8, alpha: f64) -> u8 {
        let result = f64::from(bg) + alpha * (f64::from(fg) - f64::from(bg));
        result.clamp(0.0, 255.0) as u8
    }

    /// Darken or lighten by `percent`, clamped to `0..=200`: 0 is black,
    /// 100 keeps the components and 200 is white. The result is opaque.
    pub fn change_lightness(&self, percent: i32) -> Color {
        let (r, g, b) = (self.r(), self.g(), self.b());
        if percent == 100 {
            return Color::opaque(r, g, b);
        }

        let percent = percent.clamp(0, 200);
        let shift = f64::from(percent - 100) / 100.0;
        let (bg, alpha) = if percent > 100 {
            (255, 1.0 - shift)
        } else {
            (0, 1.0 + shift)
        };
        Color::opaque(
            Color::alpha_blend(r, bg, alpha),
            Color::alpha_blend(g, bg, alpha),
            Color::alpha_blend(b, bg, alpha),
        )
    }

    /// Dimmed version of this color: each component moves 60% of the way
    /// toward `brightness`. Alpha is kept.
    pub fn make_disabled(&self, brightness: u8) -> Color {
        let blend = |c| Color::alpha_blend(c, brightness, 0.4);
        Color {
            repr: Repr::Argb(pack(self.a(), blend(self.r()), blend(self.g()), blend(self.b()))),
        }
    }

    /// HSV form of the RGB components; alpha is dropped.
    pub fn to_hsv(&self) -> Hsv {
        let red = f64::from(self.r()) / 255.0;
        let green = f64::from(self.g()) / 255.0;
        let blue = f64::from(self.b()) / 255.0;

        let min = red.min(green).min(blue);
        let max = red.max(green).max(blue);
        let delta = max - min;
        if delta == 0.0 {
            return Hsv {
                hue: 0.0,
                saturation: 0.0,
                value: max,
            };
        }

        // ties go to the first channel, red then green
        let mut hue = if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };
        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        Hsv {
            hue,
            saturation: delta / max,
            value: max,
        }
    }

    /// HSL lightness in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        let (min, max) = self.min_max();
        f64::from(min + max) / 510.0
    }

    /// HSL hue in degrees, `[0, 360)`. Zero for grays.
    pub fn hue(&self) -> f64 {
        let (r, g, b) = self.rgb();
        if r == g && g == b {
            return 0.0;
        }

        let (min, max) = self.min_max();
        let delta = f64::from(max - min);
        let mut hue = if r == max {
            f64::from(g - b) / delta
        } else if g == max {
            f64::from(b - r) / delta + 2.0
        } else {
            f64::from(r - g) / delta + 4.0
        };

        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        hue
    }

    /// HSL saturation in `[0, 1]`. Zero for grays.
    pub fn saturation(&self) -> f64 {
        let (r, g, b) = self.rgb();
        if r == g && g == b {
            return 0.0;
        }

        let (min, max) = self.min_max();
        let mut div = max + min;
        if div > 255 {
            div = 510 - max - min;
        }
        f64::from(max - min) / f64::from(div)
    }

    /// Perceived brightness, 0 for black and 1 for white.
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r()) + 0.587 * f64::from(self.g()) + 0.114 * f64::from(self.b()))
            / 255.0
    }

    fn rgb(&self) -> (i32, i32, i32) {
        (i32::from(self.r()), i32::from(self.g()), i32::from(self.b()))
    }

    fn min_max(&self) -> (i32, i32) {
        let (r, g, b) = self.rgb();
        (r.min(g).min(b), r.max(g).max(b))
    }

    /// Text form for `culture`, see [`ColorConverter::to_string_with`].
    pub fn to_string_with(&self, culture: &Culture) -> String {
        ColorConverter::to_string_with(self, culture)
    }

    /// Parse for `culture`, see [`ColorConverter::from_str_with`].
    pub fn parse_with(text: &str, culture: &Culture) -> Result<Color, ColorError> {
        ColorConverter::from_str_with(text, culture)
    }
}

fn component(param: &'static str, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange { param, value })
}

fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (u32::from(a) << ALPHA_SHIFT)
        | (u32::from(r) << RED_SHIFT)
        | (u32::from(g) << GREEN_SHIFT)
        | (u32::from(b) << BLUE_SHIFT)
}

impl From<KnownColor> for Color {
    fn from(color: KnownColor) -> Self {
        Color::known(color)
    }
}

/// `Color [Red]`, `Color [A=255, R=1, G=2, B=3]` or `Color [Empty]`.
impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Known(_) | Repr::Named(_) => write!(f, "Color [{}]", self.name()),
            Repr::Argb(_) => write!(
                f,
                "Color [A={}, R={}, G={}, B={}]",
                self.a(),
                self.r(),
                self.g(),
                self.b()
            ),
            Repr::Empty => f.write_str("Color [Empty]"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Culture::INVARIANT))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, ColorError> {
        Color::parse_with(s, &Culture::INVARIANT)
    }
}
