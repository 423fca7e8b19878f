//! Conversion between [`Color`] and its text forms.
//!
//! Accepted input, tried in order on the trimmed text:
//! 1. empty text gives [`Color::EMPTY`]
//! 2. a known color name, any case (`red`, `Window`)
//! 3. when the text holds no list separator:
//!    - a quoted name (`'Foo'`, `"Foo"`) gives an unresolved named color
//!    - `#RRGGBB`, `0xRRGGBB` or `&hRRGGBB` gives an opaque color
//! 4. a separated list of 1, 3 or 4 integers: a packed ARGB value,
//!    `r, g, b`, or `a, r, g, b`. Each integer may itself be written in hex
//!    with a `0x`, `&h` or `#` prefix.
//!
//! Colors built from numbers (steps 3 and 4, not quoted names) are replaced
//! by the first ordinary known color with the same value, so `#FF0000`
//! parses to [`Color::RED`].

use super::{Color, KnownColor};
use crate::culture::Culture;
use crate::errors::ColorError;
use crate::log::debug;

/// Alpha bits forced on by the six-digit hex forms.
const OPAQUE: u32 = 0xFF00_0000;

/// Text conversion for [`Color`].
pub struct ColorConverter;

impl ColorConverter {
    /// The known color called `name`, ignoring case. Ordinary colors win
    /// over system colors.
    pub fn named_color(name: &str) -> Option<Color> {
        KnownColor::from_name(name).map(Color::known)
    }

    /// Parse `text` using the list separator of `culture`.
    pub fn from_str_with(text: &str, culture: &Culture) -> Result<Color, ColorError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Color::EMPTY);
        }
        if let Some(color) = Self::named_color(text) {
            return Ok(color);
        }

        let separator = culture.list_separator;
        if !text.contains(separator) {
            if let Some(name) = quoted(text) {
                return Ok(Color::from_name(name));
            }
            if is_hex_literal(text) {
                let value = parse_int(text).ok_or_else(|| ColorError::invalid(text))?;
                return Ok(snap_to_known(Color::from_argb((OPAQUE | value as u32) as i32)));
            }
        }

        let mut components = Vec::new();
        let mut offset = 0;
        for token in text.split(separator) {
            let value = parse_int(token)
                .ok_or_else(|| ColorError::invalid_at(text, offset, token.len()))?;
            components.push(value);
            offset += token.len() + separator.len_utf8();
        }

        let color = match components[..] {
            [argb] => Color::from_argb(argb),
            [r, g, b] => Color::from_rgb(r, g, b)?,
            [a, r, g, b] => Color::from_argb_components(a, r, g, b)?,
            _ => return Err(ColorError::invalid(text)),
        };
        Ok(snap_to_known(color))
    }

    /// Format `color` using the list separator of `culture`:
    /// - empty gives `""`
    /// - known colors give their name
    /// - unresolved names come back quoted, `'Foo'`
    /// - anything else is `r, g, b`, or `a, r, g, b` when not opaque
    pub fn to_string_with(color: &Color, culture: &Culture) -> String {
        if color.is_empty() {
            return String::new();
        }
        if color.is_known_color() {
            return color.name().into_owned();
        }
        if color.is_named_color() {
            return format!("'{}'", color.name());
        }

        let separator = format!("{} ", culture.list_separator);
        let mut parts = Vec::with_capacity(4);
        if color.a() < 255 {
            parts.push(color.a().to_string());
        }
        parts.push(color.r().to_string());
        parts.push(color.g().to_string());
        parts.push(color.b().to_string());
        parts.join(&separator)
    }

    /// Every known color, ordinary and system, sorted by name.
    pub fn standard_values() -> Vec<Color> {
        let mut values: Vec<Color> = KnownColor::ALL.iter().copied().map(Color::known).collect();
        values.sort_by(|a, b| a.name().cmp(&b.name()));
        values.dedup();
        values
    }
}

/// The interior of a token wrapped in matching single or double quotes.
fn quoted(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    match bytes {
        [first @ (b'\'' | b'"'), .., last] if first == last => Some(&text[1..text.len() - 1]),
        _ => None,
    }
}

fn is_hex_literal(text: &str) -> bool {
    let len = text.chars().count();
    (len == 7 && text.starts_with('#'))
        || (len == 8 && ["0x", "0X", "&h", "&H"].iter().any(|p| text.starts_with(p)))
}

/// One integer token. A `0x`, `&h` or `#` prefix selects up to eight hex
/// digits, reinterpreted as signed; anything else is signed decimal.
fn parse_int(token: &str) -> Option<i32> {
    let token = token.trim();
    let hex = ["0x", "0X", "&h", "&H", "#"]
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix));
    match hex {
        Some(digits) => {
            if digits.is_empty()
                || digits.len() > 8
                || !digits.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return None;
            }
            u32::from_str_radix(digits, 16).ok().map(|v| v as i32)
        }
        None => token.parse().ok(),
    }
}

/// Replace a numerically built color by the first ordinary known color
/// with the same value.
fn snap_to_known(color: Color) -> Color {
    match KnownColor::ordinary_with_argb(color.to_argb() as u32) {
        Some(known) => {
            debug!(color = known.name(), "snapped to known color");
            Color::known(known)
        }
        None => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Color, ColorError> {
        ColorConverter::from_str_with(text, &Culture::INVARIANT)
    }

    fn format(color: &Color) -> String {
        ColorConverter::to_string_with(color, &Culture::INVARIANT)
    }

    // ==================== Names ====================

    #[test]
    fn known_names() {
        let red = parse("Red").unwrap();
        assert!(red.is_known_color());
        assert_eq!(red.to_argb() as u32, 0xFFFF_0000);
        assert_eq!(parse("  window ").unwrap(), Color::known(KnownColor::Window));
    }

    #[test]
    fn empty_text_is_empty_color() {
        assert_eq!(parse("").unwrap(), Color::EMPTY);
        assert_eq!(parse(" \t ").unwrap(), Color::EMPTY);
    }

    #[test]
    fn quoted_names_stay_unresolved() {
        let c = parse("'MyCustomColor'").unwrap();
        assert_eq!(c.name(), "MyCustomColor");
        assert_eq!(c.to_argb(), 0);
        assert!(c.is_named_color());
        assert!(!c.is_known_color());
        assert_eq!(parse("\"Foo\"").unwrap(), Color::from_name("Foo"));
    }

    #[test]
    fn quoted_known_name_resolves_through_from_name() {
        assert_eq!(parse("'Red'").unwrap(), Color::RED);
    }

    #[test]
    fn mismatched_quotes_are_invalid() {
        assert!(parse("'Foo\"").is_err());
        assert!(parse("'").is_err());
    }

    // ==================== Hex ====================

    #[test]
    fn hex_forms_snap_back() {
        assert_eq!(parse("#FF0000").unwrap(), Color::RED);
        assert_eq!(parse("0xff0000").unwrap(), Color::RED);
        assert_eq!(parse("&H0000FF").unwrap(), Color::BLUE);
    }

    #[test]
    fn hex_forces_opaque() {
        let c = parse("#123456").unwrap();
        assert_eq!(c.to_argb() as u32, 0xFF12_3456);
        assert!(!c.is_known_color());
    }

    #[test]
    fn snap_back_picks_lowest_index() {
        assert_eq!(parse("#00FFFF").unwrap(), Color::known(KnownColor::Aqua));
        assert_eq!(parse("#FF00FF").unwrap(), Color::known(KnownColor::Fuchsia));
    }

    #[test]
    fn snap_back_ignores_system_colors() {
        // GrayText's value, but no ordinary color shares it
        let c = parse("#6D6D6D").unwrap();
        assert!(!c.is_known_color());
    }

    #[test]
    fn bad_hex_is_invalid() {
        assert!(parse("#GG0000").is_err());
    }

    #[test]
    fn short_hex_goes_through_component_path() {
        // not 7 chars, so read as a single packed value
        let c = parse("#FF").unwrap();
        assert_eq!(c.to_argb(), 0xFF);
    }

    // ==================== Components ====================

    #[test]
    fn three_components() {
        assert_eq!(parse("255,0,0").unwrap(), Color::RED);
        let c = parse("1, 2, 3").unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 1, 2, 3));
    }

    #[test]
    fn four_components() {
        let c = parse("128, 1, 2, 3").unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (128, 1, 2, 3));
        assert_eq!(parse("0,255,255,255").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn single_component_is_packed_argb() {
        assert_eq!(parse("-16777216").unwrap(), Color::BLACK);
        let c = parse("16909060").unwrap();
        assert_eq!(c.to_argb(), 0x0102_0304);
    }

    #[test]
    fn component_tokens_accept_hex() {
        assert_eq!(parse("0xFF, 0, 0").unwrap(), Color::RED);
    }

    #[test]
    fn wrong_component_count_is_invalid() {
        let err = parse("1,2,3,4,5").unwrap_err();
        assert!(matches!(err, ColorError::InvalidColor { ref text, .. } if text == "1,2,3,4,5"));
        assert!(parse("1,2").is_err());
    }

    #[test]
    fn component_out_of_range_names_the_parameter() {
        let err = parse("1, 300, 0").unwrap_err();
        assert!(matches!(
            err,
            ColorError::ComponentOutOfRange {
                param: "green",
                value: 300
            }
        ));
    }

    #[test]
    fn invalid_token_is_spanned() {
        match parse("1, x, 3").unwrap_err() {
            ColorError::InvalidColor { span, .. } => {
                assert_eq!(span.offset(), 2);
                assert_eq!(span.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_bare_word_is_invalid() {
        assert!(parse("Reddish").is_err());
    }

    #[test]
    fn custom_list_separator() {
        let culture = Culture::new(',', ';');
        let c = ColorConverter::from_str_with("1; 2; 3", &culture).unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
        assert_eq!(ColorConverter::to_string_with(&c, &culture), "1; 2; 3");
    }

    // ==================== Formatting ====================

    #[test]
    fn format_each_kind() {
        assert_eq!(format(&Color::EMPTY), "");
        assert_eq!(format(&Color::RED), "Red");
        assert_eq!(format(&Color::from_name("Foo")), "'Foo'");
        assert_eq!(format(&Color::from_rgb(1, 2, 3).unwrap()), "1, 2, 3");
        assert_eq!(
            format(&Color::from_argb_components(4, 1, 2, 3).unwrap()),
            "4, 1, 2, 3"
        );
    }

    #[test]
    fn formatted_text_parses_back() {
        for color in [
            Color::RED,
            Color::known(KnownColor::Highlight),
            Color::from_name("Foo"),
            Color::from_argb_components(4, 1, 2, 3).unwrap(),
            Color::from_rgb(9, 8, 7).unwrap(),
            Color::EMPTY,
        ] {
            assert_eq!(parse(&format(&color)).unwrap(), color);
        }
    }

    // ==================== Standard values ====================

    #[test]
    fn standard_values_are_sorted_and_complete() {
        let values = ColorConverter::standard_values();
        assert_eq!(values.len(), KnownColor::COUNT);
        assert_eq!(values[0], Color::known(KnownColor::ActiveBorder));
        assert!(values.windows(2).all(|w| w[0].name() < w[1].name()));
        assert!(values.contains(&Color::known(KnownColor::Window)));
    }
}
