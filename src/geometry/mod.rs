//! Points, sizes and rectangles in integer, `f32` and `f64` coordinates.
//!
//! Each shape is generic over a [`Coord`](crate::types::Coord) and has one
//! alias per domain (`PointI`, `PointF`, `PointD` and so on). Fields are
//! public; the types are plain `Copy` values.
//!
//! All three shapes convert to and from text as a list of numbers, for
//! example `"10,20"` or `"0,0,100,50"`. Sizes and rectangles whose fields
//! are all zero print as `Empty`, and every shape accepts `Empty` back.

mod point;
mod rect;
mod size;

pub use point::{Point, PointD, PointF, PointI};
pub use rect::{Rect, RectD, RectF, RectI};
pub use size::{Size, SizeD, SizeF, SizeI};
