//! Error types with rich diagnostics using miette
//!
//! Parse errors carry the full input and a span on the offending token,
//! so a caller rendering them through miette gets an annotated snippet.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Name used for the source snippet of parse errors.
const INPUT_NAME: &str = "<input>";

pub(crate) fn input_source(source: &str) -> NamedSource<String> {
    NamedSource::new(INPUT_NAME, source.to_string())
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing a point, size or rectangle from text.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("premature end of input: expected {expected} values")]
    #[diagnostic(code(paintkit::parse::missing_token))]
    MissingToken {
        expected: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("empty value in list")]
    #[diagnostic(
        code(paintkit::parse::empty_token),
        help("values are separated by a single separator or by whitespace")
    )]
    EmptyToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("nothing before this separator")]
        span: SourceSpan,
    },

    #[error("invalid number: {token}")]
    #[diagnostic(code(paintkit::parse::invalid_number))]
    InvalidNumber {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("unexpected trailing data")]
    #[diagnostic(code(paintkit::parse::trailing_data))]
    TrailingData {
        #[source_code]
        src: NamedSource<String>,
        #[label("no more values expected")]
        span: SourceSpan,
    },
}

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from color construction and color string conversion.
#[derive(Error, Diagnostic, Debug)]
pub enum ColorError {
    #[error(
        "variable {param} has invalid value {value}; minimum allowed value is 0, maximum is 255"
    )]
    #[diagnostic(code(paintkit::color::component_out_of_range))]
    ComponentOutOfRange { param: &'static str, value: i32 },

    #[error("invalid color: {text}")]
    #[diagnostic(
        code(paintkit::color::invalid_color),
        help("use a color name, #RRGGBB, 0xRRGGBB, a quoted name, or 1, 3 or 4 integers")
    )]
    InvalidColor {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a recognized color")]
        span: SourceSpan,
    },
}

impl ColorError {
    /// Invalid color spanning the whole trimmed text.
    pub(crate) fn invalid(text: &str) -> Self {
        ColorError::InvalidColor {
            text: text.to_string(),
            src: input_source(text),
            span: (0, text.len()).into(),
        }
    }

    /// Invalid color pointing at one bad token inside the trimmed text.
    pub(crate) fn invalid_at(text: &str, offset: usize, len: usize) -> Self {
        ColorError::InvalidColor {
            text: text.to_string(),
            src: input_source(text),
            span: (offset, len).into(),
        }
    }
}

// ============================================================================
// Transform Errors
// ============================================================================

/// Errors from affine matrix operations.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("matrix is not invertible: determinant is zero")]
    #[diagnostic(
        code(paintkit::transform::singular),
        help("a matrix that scales an axis to zero cannot be inverted")
    )]
    Singular,
}
