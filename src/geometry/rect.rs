use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::Float;

use super::point::{float_to_i32, round_ties_even};
use super::{Point, Size};
use crate::culture::Culture;
use crate::errors::ParseError;
use crate::tokenizer::{EMPTY_TOKEN, format_values, parse_values};
use crate::types::Coord;

/// An axis-aligned rectangle: a location plus a size.
///
/// `right()` and `bottom()` are always derived as `x + width` and
/// `y + height`. Containment is half-open: the left and top edges are
/// inside, the right and bottom edges are not.
///
/// Two emptiness tests exist and they are not interchangeable:
/// [`Rect::is_empty`] holds only for the all-zero rectangle (the value
/// printed as `Empty`), while [`Rect::size_is_empty`] holds for any
/// rectangle that covers no area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

pub type RectI = Rect<i32>;
pub type RectF = Rect<f32>;
pub type RectD = Rect<f64>;

impl<T: Coord> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The all-zero rectangle.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_location_size(location: Point<T>, size: Size<T>) -> Self {
        Rect::new(location.x, location.y, size.width, size.height)
    }

    /// Build from edges. No validation: `right < left` yields a negative width.
    pub fn from_ltrb(left: T, top: T, right: T, bottom: T) -> Self {
        Rect::new(left, top, right.sub_wrapped(left), bottom.sub_wrapped(top))
    }

    /// Build from the top-left and bottom-right corners.
    pub fn from_points(top_left: Point<T>, bottom_right: Point<T>) -> Self {
        Rect::from_ltrb(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// A rectangle of `size` centered on `center`.
    pub fn from_center(center: Point<T>, size: Size<T>) -> Self {
        let two = T::one() + T::one();
        Rect::new(
            center.x.sub_wrapped(size.width / two),
            center.y.sub_wrapped(size.height / two),
            size.width,
            size.height,
        )
    }

    /// True only when all four fields are zero.
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// True only when all four fields are zero. Same test as [`Rect::is_empty`].
    pub fn is_zero(&self) -> bool {
        let zero = T::zero();
        self.x == zero && self.y == zero && self.width == zero && self.height == zero
    }

    /// True when the rectangle covers no area (`width <= 0 || height <= 0`).
    pub fn size_is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    pub fn location(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    pub fn set_location(&mut self, location: Point<T>) {
        self.x = location.x;
        self.y = location.y;
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    pub fn set_size(&mut self, size: Size<T>) {
        self.width = size.width;
        self.height = size.height;
    }

    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x.add_wrapped(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y.add_wrapped(self.height)
    }

    pub fn top_left(&self) -> Point<T> {
        Point::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point<T> {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point<T> {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point<T> {
        Point::new(self.right(), self.bottom())
    }

    /// Location plus half the size. Integer rectangles round toward zero.
    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        self.location() + self.size() / two
    }

    /// Move so that the center lands on `center`, keeping the size.
    pub fn set_center(&mut self, center: Point<T>) {
        *self = Rect::from_center(center, self.size());
    }

    /// Half-open containment: `x <= px < right` and `y <= py < bottom`.
    pub fn contains(&self, px: T, py: T) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn contains_point(&self, point: Point<T>) -> bool {
        self.contains(point.x, point.y)
    }

    /// Like [`Rect::contains_point`], but false for rectangles covering no area.
    pub fn not_empty_and_contains(&self, point: Point<T>) -> bool {
        !self.size_is_empty() && self.contains_point(point)
    }

    /// True when `rect` lies entirely inside `self`. Shared edges count.
    pub fn contains_rect(&self, rect: &Rect<T>) -> bool {
        self.x <= rect.x
            && rect.right() <= self.right()
            && self.y <= rect.y
            && rect.bottom() <= self.bottom()
    }

    /// True when the interiors overlap; touching edges do not count.
    pub fn intersects_with(&self, rect: &Rect<T>) -> bool {
        rect.x < self.right()
            && self.x < rect.right()
            && rect.y < self.bottom()
            && self.y < rect.bottom()
    }

    /// The overlapping area of `a` and `b`, or the empty rectangle when
    /// they are disjoint. Rectangles sharing only an edge give a
    /// zero-sized result at that edge.
    pub fn intersection(a: &Rect<T>, b: &Rect<T>) -> Rect<T> {
        let x1 = a.x.max_of(b.x);
        let x2 = a.right().min_of(b.right());
        let y1 = a.y.max_of(b.y);
        let y2 = a.bottom().min_of(b.bottom());

        if x2 >= x1 && y2 >= y1 {
            Rect::new(x1, y1, x2.sub_wrapped(x1), y2.sub_wrapped(y1))
        } else {
            Rect::empty()
        }
    }

    /// Bounding box of both rectangles.
    pub fn union(a: &Rect<T>, b: &Rect<T>) -> Rect<T> {
        let x1 = a.x.min_of(b.x);
        let x2 = a.right().max_of(b.right());
        let y1 = a.y.min_of(b.y);
        let y2 = a.bottom().max_of(b.bottom());
        Rect::new(x1, y1, x2.sub_wrapped(x1), y2.sub_wrapped(y1))
    }

    /// Replace `self` with its intersection with `rect`.
    pub fn intersect(&mut self, rect: &Rect<T>) {
        *self = Rect::intersection(rect, self);
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and bottom.
    /// Negative amounts shrink, possibly past zero.
    pub fn inflate(&mut self, dx: T, dy: T) {
        self.x = self.x.sub_wrapped(dx);
        self.y = self.y.sub_wrapped(dy);
        self.width = self.width.add_wrapped(dx.twice());
        self.height = self.height.add_wrapped(dy.twice());
    }

    /// Inflated copy, see [`Rect::inflate`].
    pub fn inflated(mut self, dx: T, dy: T) -> Self {
        self.inflate(dx, dy);
        self
    }

    pub fn offset(&mut self, dx: T, dy: T) {
        self.x = self.x.add_wrapped(dx);
        self.y = self.y.add_wrapped(dy);
    }

    pub fn offset_by(mut self, dx: T, dy: T) -> Self {
        self.offset(dx, dy);
        self
    }

    pub fn with_size(self, size: Size<T>) -> Self {
        Rect::from_location_size(self.location(), size)
    }

    pub fn with_location(self, location: Point<T>) -> Self {
        Rect::from_location_size(location, self.size())
    }

    /// Same size, centered inside `container`.
    pub fn center_in(&self, container: &Rect<T>) -> Self {
        let two = T::one() + T::one();
        Rect::new(
            container.x.add_wrapped(container.width.sub_wrapped(self.width) / two),
            container.y.add_wrapped(container.height.sub_wrapped(self.height) / two),
            self.width,
            self.height,
        )
    }

    pub fn parse_with(source: &str, culture: &Culture) -> Result<Self, ParseError> {
        Ok(match parse_values::<T, 4>(source, culture, true)? {
            Some([x, y, width, height]) => Rect::new(x, y, width, height),
            None => Rect::empty(),
        })
    }

    pub fn to_string_with(&self, culture: &Culture) -> String {
        if self.is_empty() {
            return EMPTY_TOKEN.to_string();
        }
        format_values(&[self.x, self.y, self.width, self.height], culture)
    }
}

impl<T: Coord + Float> Rect<T> {
    /// Smallest integer rectangle with each field rounded up.
    pub fn ceiling(&self) -> RectI {
        Rect::new(
            float_to_i32(self.x.ceil()),
            float_to_i32(self.y.ceil()),
            float_to_i32(self.width.ceil()),
            float_to_i32(self.height.ceil()),
        )
    }

    /// Integer rectangle with each field truncated toward zero.
    pub fn truncate(&self) -> RectI {
        Rect::new(
            float_to_i32(self.x.trunc()),
            float_to_i32(self.y.trunc()),
            float_to_i32(self.width.trunc()),
            float_to_i32(self.height.trunc()),
        )
    }

    /// Integer rectangle with each field rounded half to even.
    pub fn round(&self) -> RectI {
        Rect::new(
            float_to_i32(round_ties_even(self.x)),
            float_to_i32(round_ties_even(self.y)),
            float_to_i32(round_ties_even(self.width)),
            float_to_i32(round_ties_even(self.height)),
        )
    }
}

impl<T: Eq> Eq for Rect<T> {}

impl<T: Coord> Hash for Rect<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_coord(state);
        self.y.hash_coord(state);
        self.width.hash_coord(state);
        self.height.hash_coord(state);
    }
}

impl<T> From<(T, T, T, T)> for Rect<T> {
    fn from((x, y, width, height): (T, T, T, T)) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Coord> From<(Point<T>, Size<T>)> for Rect<T> {
    fn from((location, size): (Point<T>, Size<T>)) -> Self {
        Rect::from_location_size(location, size)
    }
}

impl From<RectI> for RectD {
    fn from(r: RectI) -> Self {
        Rect::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.width),
            f64::from(r.height),
        )
    }
}

impl From<RectI> for RectF {
    fn from(r: RectI) -> Self {
        Rect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

impl<T: Coord> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Culture::INVARIANT))
    }
}

impl<T: Coord> FromStr for Rect<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Rect::parse_with(s, &Culture::INVARIANT)
    }
}
