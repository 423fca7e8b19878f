//! Scalar coordinate domains for the geometry types.
//!
//! Every point, size and rectangle exists in three numeric domains
//! (`i32`, `f32`, `f64`) with the same semantics. [`Coord`] captures what
//! differs between them:
//! - Integer arithmetic wraps on overflow instead of panicking
//! - Float comparison is exact IEEE-754, no epsilon
//! - Each domain has its own token grammar for parsing

use std::fmt;
use std::hash::Hasher;

use num_traits::Num;

use crate::culture::Culture;

/// A numeric type usable as a geometry coordinate.
pub trait Coord:
    Num + Copy + Default + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// `self + rhs`; integer domains wrap around on overflow.
    fn add_wrapped(self, rhs: Self) -> Self;

    /// `self - rhs`; integer domains wrap around on overflow.
    fn sub_wrapped(self, rhs: Self) -> Self;

    /// `self * rhs`; integer domains wrap around on overflow.
    fn mul_wrapped(self, rhs: Self) -> Self;

    /// `self / rhs`; integer domains wrap around on overflow
    /// (`i32::MIN / -1`) and panic on division by zero.
    fn div_wrapped(self, rhs: Self) -> Self;

    /// `2 * self`; integer domains wrap around on overflow.
    fn twice(self) -> Self {
        self.add_wrapped(self)
    }

    /// The smaller of two values (`self` on ties or NaN).
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two values (`self` on ties or NaN).
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Parse a single invariant-culture token.
    fn parse_token(token: &str) -> Option<Self>;

    /// Lossy widening used by cross-domain conversions.
    fn as_f64(self) -> f64;

    /// Feed the value to a hasher. Equal values hash equally.
    fn hash_coord<H: Hasher>(self, state: &mut H);

    /// Format for a culture; only the decimal separator varies.
    fn format_with(self, culture: &Culture) -> String {
        let text = self.to_string();
        if culture.decimal_separator == '.' {
            text
        } else {
            text.replace('.', culture.decimal_separator.encode_utf8(&mut [0; 4]))
        }
    }
}

impl Coord for i32 {
    #[inline]
    fn add_wrapped(self, rhs: i32) -> i32 {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn sub_wrapped(self, rhs: i32) -> i32 {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn mul_wrapped(self, rhs: i32) -> i32 {
        self.wrapping_mul(rhs)
    }

    #[inline]
    fn div_wrapped(self, rhs: i32) -> i32 {
        self.wrapping_div(rhs)
    }

    fn parse_token(token: &str) -> Option<i32> {
        token.parse().ok()
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn hash_coord<H: Hasher>(self, state: &mut H) {
        state.write_i32(self);
    }
}

macro_rules! float_coord {
    ($ty:ty, $write:ident) => {
        impl Coord for $ty {
            #[inline]
            fn add_wrapped(self, rhs: $ty) -> $ty {
                self + rhs
            }

            #[inline]
            fn sub_wrapped(self, rhs: $ty) -> $ty {
                self - rhs
            }

            #[inline]
            fn mul_wrapped(self, rhs: $ty) -> $ty {
                self * rhs
            }

            #[inline]
            fn div_wrapped(self, rhs: $ty) -> $ty {
                self / rhs
            }

            fn parse_token(token: &str) -> Option<$ty> {
                token.parse().ok()
            }

            #[inline]
            fn as_f64(self) -> f64 {
                f64::from(self)
            }

            fn hash_coord<H: Hasher>(self, state: &mut H) {
                // 0.0 == -0.0, so both must hash alike
                let normalized = if self == 0.0 { 0.0 } else { self };
                state.$write(normalized.to_bits());
            }
        }
    };
}

float_coord!(f32, write_u32);
float_coord!(f64, write_u64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<T: Coord>(v: T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash_coord(&mut h);
        h.finish()
    }

    // ==================== Arithmetic ====================

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(i32::MAX.add_wrapped(1), i32::MIN);
        assert_eq!(i32::MIN.sub_wrapped(1), i32::MAX);
        assert_eq!(i32::MAX.twice(), -2);
        assert_eq!(i32::MAX.mul_wrapped(2), -2);
        assert_eq!(i32::MIN.div_wrapped(-1), i32::MIN);
        assert_eq!(7.div_wrapped(-2), -3);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = 0;
        let _ = 1.div_wrapped(zero);
    }

    #[test]
    fn float_arithmetic_is_plain() {
        assert_eq!(1.5f64.add_wrapped(2.0), 3.5);
        assert_eq!(1.5f32.sub_wrapped(2.0), -0.5);
        assert_eq!(0.25f64.twice(), 0.5);
        assert_eq!(1.0f64.div_wrapped(0.0), f64::INFINITY);
    }

    #[test]
    fn min_max_keep_self_on_ties() {
        assert_eq!(3.min_of(5), 3);
        assert_eq!(3.max_of(5), 5);
        assert_eq!(4.0f64.min_of(4.0), 4.0);
    }

    // ==================== Parsing and formatting ====================

    #[test]
    fn parse_tokens_per_domain() {
        assert_eq!(i32::parse_token("-12"), Some(-12));
        assert_eq!(i32::parse_token("1.5"), None);
        assert_eq!(f64::parse_token("1.5"), Some(1.5));
        assert_eq!(f32::parse_token("abc"), None);
    }

    #[test]
    fn format_swaps_decimal_separator() {
        let german = Culture::new(',', ';');
        assert_eq!(1.5f64.format_with(&german), "1,5");
        assert_eq!(1.5f64.format_with(&Culture::INVARIANT), "1.5");
        assert_eq!(42i32.format_with(&german), "42");
    }

    // ==================== Hashing ====================

    #[test]
    fn signed_zeros_hash_alike() {
        assert_eq!(hash_of(0.0f64), hash_of(-0.0f64));
        assert_eq!(hash_of(0.0f32), hash_of(-0.0f32));
    }

    #[test]
    fn distinct_values_hash_differently() {
        assert_ne!(hash_of(1.0f64), hash_of(2.0f64));
        assert_ne!(hash_of(1i32), hash_of(2i32));
    }
}
