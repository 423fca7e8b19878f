//! Splitting numeric lists such as `"1, 2, 3, 4"` into tokens.
//!
//! Values are separated by whitespace, by a single separator character,
//! or by both. Two separators in a row, a separator at the very end and
//! leftover tokens are all errors, each reported with a span into the
//! input text.

use std::borrow::Cow;

use crate::culture::Culture;
use crate::errors::{ParseError, input_source};
use crate::log::debug;
use crate::types::Coord;

/// Literal accepted in place of an all-zero value.
pub(crate) const EMPTY_TOKEN: &str = "Empty";

pub(crate) struct Tokenizer<'a> {
    source: &'a str,
    separator: char,
    pos: usize,
    /// Offset of a separator not yet followed by a token.
    pending_separator: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(source: &'a str, separator: char) -> Self {
        let mut tokenizer = Tokenizer {
            source,
            separator,
            pos: 0,
            pending_separator: None,
        };
        tokenizer.skip_whitespace();
        tokenizer
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Returns the next token and its byte offset, or an error if the input
    /// is exhausted or holds an empty value. `expected` is the total number
    /// of values the caller is reading, used for the error message.
    pub(crate) fn next_required(
        &mut self,
        expected: usize,
    ) -> Result<(&'a str, usize), ParseError> {
        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return Err(ParseError::MissingToken {
                expected,
                src: input_source(self.source),
                span: (self.source.len(), 0).into(),
            });
        };
        if first == self.separator {
            return Err(ParseError::EmptyToken {
                src: input_source(self.source),
                span: (self.pos, first.len_utf8()).into(),
            });
        }

        let start = self.pos;
        let len = rest
            .find(|c: char| c.is_whitespace() || c == self.separator)
            .unwrap_or(rest.len());
        self.pos += len;
        self.pending_separator = None;
        self.scan_to_next_token();
        Ok((&self.source[start..start + len], start))
    }

    /// Skip whitespace and at most one separator.
    fn scan_to_next_token(&mut self) {
        self.skip_whitespace();
        if self.rest().starts_with(self.separator) {
            self.pending_separator = Some(self.pos);
            self.pos += self.separator.len_utf8();
            self.skip_whitespace();
        }
    }

    /// Succeeds only if every token has been consumed.
    pub(crate) fn last_required(&self) -> Result<(), ParseError> {
        if self.pos < self.source.len() {
            return Err(ParseError::TrailingData {
                src: input_source(self.source),
                span: (self.pos, self.source.len() - self.pos).into(),
            });
        }
        if let Some(at) = self.pending_separator {
            return Err(ParseError::TrailingData {
                src: input_source(self.source),
                span: (at, self.separator.len_utf8()).into(),
            });
        }
        Ok(())
    }
}

/// Parse exactly `N` numbers, or the `Empty` literal when `allow_empty` is
/// set (returned as `None`).
pub(crate) fn parse_values<T: Coord, const N: usize>(
    source: &str,
    culture: &Culture,
    allow_empty: bool,
) -> Result<Option<[T; N]>, ParseError> {
    let mut tokens = Tokenizer::new(source, culture.numeric_list_separator());

    let (first, at) = tokens.next_required(N)?;
    if allow_empty && first == EMPTY_TOKEN {
        tokens.last_required()?;
        return Ok(None);
    }

    let mut values = [T::zero(); N];
    values[0] = parse_value(source, first, at, culture)?;
    for value in values.iter_mut().skip(1) {
        let (token, at) = tokens.next_required(N)?;
        *value = parse_value(source, token, at, culture)?;
    }
    tokens.last_required()?;
    Ok(Some(values))
}

fn parse_value<T: Coord>(
    source: &str,
    token: &str,
    at: usize,
    culture: &Culture,
) -> Result<T, ParseError> {
    let normalized: Cow<'_, str> = if culture.decimal_separator == '.' {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(token.replace(culture.decimal_separator, "."))
    };
    T::parse_token(&normalized).ok_or_else(|| {
        debug!(token, "rejected numeric token");
        ParseError::InvalidNumber {
            token: token.to_string(),
            src: input_source(source),
            span: (at, token.len()).into(),
        }
    })
}

/// Join values with the culture's numeric list separator.
pub(crate) fn format_values<T: Coord>(values: &[T], culture: &Culture) -> String {
    let separator = culture.numeric_list_separator().to_string();
    values
        .iter()
        .map(|v| v.format_with(culture))
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<&str> {
        let mut t = Tokenizer::new(source, ',');
        let mut out = Vec::new();
        while let Ok((token, _)) = t.next_required(0) {
            out.push(token);
        }
        out
    }

    // ==================== Tokenizer tests ====================

    #[test]
    fn separators_and_whitespace_both_split() {
        assert_eq!(tokens("1,2,3"), ["1", "2", "3"]);
        assert_eq!(tokens("  1 2\t3  "), ["1", "2", "3"]);
        assert_eq!(tokens("1 , 2,3"), ["1", "2", "3"]);
    }

    #[test]
    fn token_offsets_point_into_source() {
        let mut t = Tokenizer::new("  10,  20", ',');
        assert_eq!(t.next_required(2).unwrap(), ("10", 2));
        assert_eq!(t.next_required(2).unwrap(), ("20", 7));
        assert!(t.last_required().is_ok());
    }

    #[test]
    fn double_separator_is_empty_token() {
        let mut t = Tokenizer::new("1,,2", ',');
        t.next_required(2).unwrap();
        assert!(matches!(
            t.next_required(2),
            Err(ParseError::EmptyToken { .. })
        ));
    }

    #[test]
    fn dangling_separator_is_rejected() {
        let mut t = Tokenizer::new("1,", ',');
        t.next_required(1).unwrap();
        assert!(matches!(
            t.last_required(),
            Err(ParseError::TrailingData { .. })
        ));
    }

    #[test]
    fn exhausted_input_is_missing_token() {
        let mut t = Tokenizer::new("   ", ',');
        assert!(matches!(
            t.next_required(2),
            Err(ParseError::MissingToken { expected: 2, .. })
        ));
    }

    // ==================== parse_values tests ====================

    #[test]
    fn parses_exact_count() {
        let v: Option<[i32; 2]> = parse_values("3, 4", &Culture::INVARIANT, false).unwrap();
        assert_eq!(v, Some([3, 4]));
    }

    #[test]
    fn too_many_values_is_trailing_data() {
        let err = parse_values::<i32, 2>("1,2,3", &Culture::INVARIANT, false).unwrap_err();
        assert!(matches!(err, ParseError::TrailingData { .. }));
    }

    #[test]
    fn too_few_values_is_missing_token() {
        let err = parse_values::<f64, 4>("1,2,3", &Culture::INVARIANT, true).unwrap_err();
        assert!(matches!(err, ParseError::MissingToken { expected: 4, .. }));
    }

    #[test]
    fn empty_literal_only_when_allowed() {
        let v = parse_values::<f64, 4>(" Empty ", &Culture::INVARIANT, true).unwrap();
        assert_eq!(v, None);
        let err = parse_values::<f64, 2>("Empty", &Culture::INVARIANT, false).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
        let err = parse_values::<f64, 4>("Empty, 1", &Culture::INVARIANT, true).unwrap_err();
        assert!(matches!(err, ParseError::TrailingData { .. }));
    }

    #[test]
    fn invalid_number_spans_the_token() {
        let err = parse_values::<i32, 2>("1, x7", &Culture::INVARIANT, false).unwrap_err();
        match err {
            ParseError::InvalidNumber { token, span, .. } => {
                assert_eq!(token, "x7");
                assert_eq!(span.offset(), 3);
                assert_eq!(span.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn comma_decimal_culture_uses_semicolons() {
        let german = Culture::new(',', ';');
        let v: Option<[f64; 2]> = parse_values("1,5; 2,25", &german, false).unwrap();
        assert_eq!(v, Some([1.5, 2.25]));
        assert_eq!(format_values(&[1.5f64, 2.25], &german), "1,5;2,25");
    }
}
