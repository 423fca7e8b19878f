//! Number and list formatting conventions used by parse/format.

/// Separators used when converting geometry and colors to and from text.
///
/// Parsing and formatting default to [`Culture::INVARIANT`]; the `*_with`
/// variants accept any other culture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Culture {
    /// Character between the integral and fractional part of a number.
    pub decimal_separator: char,
    /// Separator between color components.
    pub list_separator: char,
}

impl Culture {
    /// The fixed "en-US"-equivalent culture.
    pub const INVARIANT: Culture = Culture {
        decimal_separator: '.',
        list_separator: ',',
    };

    pub const fn new(decimal_separator: char, list_separator: char) -> Self {
        Culture {
            decimal_separator,
            list_separator,
        }
    }

    /// Separator between the numbers of a point, size or rectangle.
    ///
    /// A culture writing `1,5` for one and a half cannot also separate
    /// values with commas, so it gets `;`.
    pub fn numeric_list_separator(&self) -> char {
        if self.decimal_separator == ',' { ';' } else { ',' }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::INVARIANT
    }
}
