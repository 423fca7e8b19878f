use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_traits::Float;

use super::Size;
use crate::culture::Culture;
use crate::errors::ParseError;
use crate::tokenizer::{format_values, parse_values};
use crate::types::Coord;

/// A location in 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

pub type PointI = Point<i32>;
pub type PointF = Point<f32>;
pub type PointD = Point<f64>;

impl<T: Coord> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// The origin, `(0, 0)`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when both coordinates are zero.
    pub fn is_empty(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    /// Move the point in place.
    pub fn offset(&mut self, dx: T, dy: T) {
        self.x = self.x.add_wrapped(dx);
        self.y = self.y.add_wrapped(dy);
    }

    /// A copy moved by `delta`.
    pub fn offset_by(self, delta: Point<T>) -> Self {
        Point::new(self.x.add_wrapped(delta.x), self.y.add_wrapped(delta.y))
    }

    /// Reinterpret as a size.
    pub fn to_size(self) -> Size<T> {
        Size::new(self.x, self.y)
    }

    pub fn parse_with(source: &str, culture: &Culture) -> Result<Self, ParseError> {
        Ok(match parse_values::<T, 2>(source, culture, true)? {
            Some([x, y]) => Point::new(x, y),
            None => Point::empty(),
        })
    }

    pub fn to_string_with(&self, culture: &Culture) -> String {
        format_values(&[self.x, self.y], culture)
    }
}

impl<T: Coord + Float> Point<T> {
    /// Round both coordinates up into an integer point.
    pub fn ceiling(self) -> PointI {
        Point::new(float_to_i32(self.x.ceil()), float_to_i32(self.y.ceil()))
    }

    /// Drop the fractional part of both coordinates.
    pub fn truncate(self) -> PointI {
        Point::new(float_to_i32(self.x.trunc()), float_to_i32(self.y.trunc()))
    }

    /// Round both coordinates to the nearest integer, ties to even.
    pub fn round(self) -> PointI {
        Point::new(
            float_to_i32(round_ties_even(self.x)),
            float_to_i32(round_ties_even(self.y)),
        )
    }
}

/// Saturating float to integer cast; NaN becomes zero.
pub(super) fn float_to_i32<T: Coord>(value: T) -> i32 {
    value.as_f64() as i32
}

pub(super) fn round_ties_even<T: Coord + Float>(value: T) -> T {
    let rounded = value.round();
    let two = T::one() + T::one();
    if (value - value.trunc()).abs() == T::one() / two {
        // exactly halfway: round() went away from zero, pull back if odd
        if (rounded % two) != T::zero() {
            return rounded - value.signum();
        }
    }
    rounded
}

impl<T: Eq> Eq for Point<T> {}

impl<T: Coord> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_coord(state);
        self.y.hash_coord(state);
    }
}

impl<T: Coord> Add<Size<T>> for Point<T> {
    type Output = Point<T>;

    fn add(self, size: Size<T>) -> Point<T> {
        Point::new(self.x.add_wrapped(size.width), self.y.add_wrapped(size.height))
    }
}

impl<T: Coord> Sub<Size<T>> for Point<T> {
    type Output = Point<T>;

    fn sub(self, size: Size<T>) -> Point<T> {
        Point::new(self.x.sub_wrapped(size.width), self.y.sub_wrapped(size.height))
    }
}

/// Vector between two points.
impl<T: Coord> Sub for Point<T> {
    type Output = Size<T>;

    fn sub(self, other: Point<T>) -> Size<T> {
        Size::new(self.x.sub_wrapped(other.x), self.y.sub_wrapped(other.y))
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl From<PointI> for PointD {
    fn from(p: PointI) -> Self {
        Point::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<PointI> for PointF {
    fn from(p: PointI) -> Self {
        Point::new(p.x as f32, p.y as f32)
    }
}

impl From<PointF> for PointD {
    fn from(p: PointF) -> Self {
        Point::new(f64::from(p.x), f64::from(p.y))
    }
}

impl<T: Coord> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Culture::INVARIANT))
    }
}

impl<T: Coord> FromStr for Point<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Point::parse_with(s, &Culture::INVARIANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{SizeD, SizeI};

    #[test]
    fn offset_moves_in_place() {
        let mut p = PointI::new(1, 2);
        p.offset(3, -4);
        assert_eq!(p, PointI::new(4, -2));
        assert_eq!(p.offset_by(PointI::new(1, 1)), PointI::new(5, -1));
    }

    #[test]
    fn integer_offset_wraps() {
        let mut p = PointI::new(i32::MAX, 0);
        p.offset(1, 0);
        assert_eq!(p.x, i32::MIN);
    }

    #[test]
    fn size_arithmetic() {
        let p = PointD::new(1.5, 2.0);
        assert_eq!(p + SizeD::new(1.0, 1.0), PointD::new(2.5, 3.0));
        assert_eq!(p - SizeD::new(1.0, 1.0), PointD::new(0.5, 1.0));
        assert_eq!(PointI::new(5, 5) - PointI::new(2, 3), SizeI::new(3, 2));
    }

    #[test]
    fn emptiness_is_the_origin() {
        assert!(PointF::empty().is_empty());
        assert!(PointD::new(-0.0, 0.0).is_empty());
        assert!(!PointI::new(0, 1).is_empty());
    }

    #[test]
    fn float_to_int_conversions() {
        let p = PointD::new(1.5, -2.5);
        assert_eq!(p.ceiling(), PointI::new(2, -2));
        assert_eq!(p.truncate(), PointI::new(1, -2));
        assert_eq!(p.round(), PointI::new(2, -2));
        assert_eq!(PointD::new(0.5, 3.5).round(), PointI::new(0, 4));
        assert_eq!(PointD::new(2.4, 2.6).round(), PointI::new(2, 3));
    }

    #[test]
    fn text_round_trip() {
        let p = PointD::new(1.5, -2.0);
        assert_eq!(p.to_string(), "1.5,-2");
        assert_eq!("1.5,-2".parse::<PointD>().unwrap(), p);
        assert_eq!(" 3 4 ".parse::<PointI>().unwrap(), PointI::new(3, 4));
        assert_eq!("Empty".parse::<PointI>().unwrap(), PointI::empty());
    }

    #[test]
    fn origin_prints_as_numbers() {
        assert_eq!(PointI::empty().to_string(), "0,0");
    }

    #[test]
    fn culture_aware_text() {
        let german = Culture::new(',', ';');
        let p = PointD::new(1.5, 2.0);
        assert_eq!(p.to_string_with(&german), "1,5;2");
        assert_eq!(PointD::parse_with("1,5;2", &german).unwrap(), p);
    }
}
