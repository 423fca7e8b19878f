//! Geometry and color primitives for 2D drawing.
//!
//! - [`geometry`]: points, sizes and rectangles over `i32`, `f32` and `f64`
//! - [`TransformMatrix`]: affine transforms with prepend composition
//! - [`Color`]: ARGB colors, the [`KnownColor`] table and [`ColorConverter`]
//!
//! Every value type round-trips through text:
//!
//! ```
//! use paintkit::{Color, RectI};
//!
//! let r: RectI = "0, 0, 10, 10".parse().unwrap();
//! assert!(r.contains(9, 5));
//! assert!(!r.contains(10, 5));
//!
//! let c: Color = "#FF0000".parse().unwrap();
//! assert_eq!(c, Color::RED);
//! assert_eq!(c.to_string(), "Red");
//! ```

pub mod color;
pub mod culture;
pub mod errors;
pub mod geometry;
pub mod transform;
pub mod types;

mod log;
mod tokenizer;

pub use color::{Color, ColorConverter, Hsv, KnownColor, KnownColorCategory};
pub use culture::Culture;
pub use errors::{ColorError, ParseError, TransformError};
pub use geometry::{
    Point, PointD, PointF, PointI, Rect, RectD, RectF, RectI, Size, SizeD, SizeF, SizeI,
};
pub use transform::TransformMatrix;
pub use types::Coord;
