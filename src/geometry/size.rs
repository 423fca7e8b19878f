use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use num_traits::Float;

use super::Point;
use super::point::float_to_i32;
use crate::culture::Culture;
use crate::errors::ParseError;
use crate::tokenizer::{EMPTY_TOKEN, format_values, parse_values};
use crate::types::Coord;

/// A width and height pair.
///
/// Negative extents are allowed; nothing here clamps them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

pub type SizeI = Size<i32>;
pub type SizeF = Size<f32>;
pub type SizeD = Size<f64>;

impl<T: Coord> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True when both extents are zero. This is the value printed as `Empty`.
    pub fn is_empty(&self) -> bool {
        self.width == T::zero() && self.height == T::zero()
    }

    /// True when either extent is zero.
    pub fn any_is_empty(&self) -> bool {
        self.width == T::zero() || self.height == T::zero()
    }

    /// True when either extent is zero or negative; such a size covers no area.
    pub fn any_is_empty_or_negative(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size<T>) -> Self {
        Size::new(self.width.max_of(other.width), self.height.max_of(other.height))
    }

    /// Component-wise minimum.
    pub fn min(self, other: Size<T>) -> Self {
        Size::new(self.width.min_of(other.width), self.height.min_of(other.height))
    }

    pub fn to_point(self) -> Point<T> {
        Point::new(self.width, self.height)
    }

    pub fn parse_with(source: &str, culture: &Culture) -> Result<Self, ParseError> {
        Ok(match parse_values::<T, 2>(source, culture, true)? {
            Some([width, height]) => Size::new(width, height),
            None => Size::empty(),
        })
    }

    pub fn to_string_with(&self, culture: &Culture) -> String {
        if self.is_empty() {
            return EMPTY_TOKEN.to_string();
        }
        format_values(&[self.width, self.height], culture)
    }
}

impl<T: Coord + Float> Size<T> {
    /// Round both extents up, staying in the float domain.
    pub fn ceiling(self) -> Self {
        Size::new(self.width.ceil(), self.height.ceil())
    }

    /// Drop the fractional part of both extents.
    pub fn truncate(self) -> SizeI {
        Size::new(
            float_to_i32(self.width.trunc()),
            float_to_i32(self.height.trunc()),
        )
    }
}

impl<T: Eq> Eq for Size<T> {}

impl<T: Coord> Hash for Size<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash_coord(state);
        self.height.hash_coord(state);
    }
}

impl<T: Coord> Add for Size<T> {
    type Output = Size<T>;

    fn add(self, other: Size<T>) -> Size<T> {
        Size::new(
            self.width.add_wrapped(other.width),
            self.height.add_wrapped(other.height),
        )
    }
}

impl<T: Coord> Sub for Size<T> {
    type Output = Size<T>;

    fn sub(self, other: Size<T>) -> Size<T> {
        Size::new(
            self.width.sub_wrapped(other.width),
            self.height.sub_wrapped(other.height),
        )
    }
}

impl<T: Coord> Mul<T> for Size<T> {
    type Output = Size<T>;

    fn mul(self, factor: T) -> Size<T> {
        Size::new(self.width.mul_wrapped(factor), self.height.mul_wrapped(factor))
    }
}

/// Integer sizes wrap on overflow (`i32::MIN / -1`) like the other
/// operators, and panic on division by zero.
impl<T: Coord> Div<T> for Size<T> {
    type Output = Size<T>;

    fn div(self, divisor: T) -> Size<T> {
        Size::new(
            self.width.div_wrapped(divisor),
            self.height.div_wrapped(divisor),
        )
    }
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Size { width, height }
    }
}

impl<T> From<Size<T>> for (T, T) {
    fn from(size: Size<T>) -> Self {
        (size.width, size.height)
    }
}

impl From<SizeI> for SizeD {
    fn from(s: SizeI) -> Self {
        Size::new(f64::from(s.width), f64::from(s.height))
    }
}

impl From<SizeI> for SizeF {
    fn from(s: SizeI) -> Self {
        Size::new(s.width as f32, s.height as f32)
    }
}

impl<T: Coord> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Culture::INVARIANT))
    }
}

impl<T: Coord> FromStr for Size<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Size::parse_with(s, &Culture::INVARIANT)
    }
}
