//! Colors: the [`Color`] value, the [`KnownColor`] table and text
//! conversion through [`ColorConverter`].

mod convert;
mod known;
mod value;

pub use convert::ColorConverter;
pub use known::{KnownColor, KnownColorCategory};
pub use value::{Color, Hsv};
