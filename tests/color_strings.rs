//! Data-driven color string conversion tests.
//!
//! Each `tests/data/colors/*.color` file is a list of `key: value` lines:
//!
//! - `input`: text handed to the parser (everything after `input: `)
//! - `separator`: list separator, `,` when absent
//! - `kind`: `empty`, `known`, `system`, `named`, `argb` or `error`
//! - `name`, `argb` (8 hex digits), `display`: optional expectations
//!
//! Lines starting with `#` are comments.

use datatest_stable::Utf8Path;
use paintkit::{Color, ColorConverter, Culture};

#[derive(Debug, Default)]
struct Fixture {
    input: String,
    separator: Option<char>,
    kind: String,
    name: Option<String>,
    argb: Option<u32>,
    display: Option<String>,
}

fn parse_fixture(text: &str) -> Result<Fixture, String> {
    let mut fixture = Fixture::default();
    for line in text.lines() {
        if line.starts_with('#') || line.trim().is_empty() && !line.starts_with("input:") {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| format!("expected `key: value`, got {line:?}"))?;
        let value = value.strip_prefix(' ').unwrap_or(value);
        match key {
            "input" => fixture.input = value.to_string(),
            "separator" => {
                fixture.separator = Some(
                    value
                        .trim()
                        .chars()
                        .next()
                        .ok_or("separator needs a character")?,
                )
            }
            "kind" => fixture.kind = value.trim().to_string(),
            "name" => fixture.name = Some(value.to_string()),
            "argb" => {
                fixture.argb = Some(
                    u32::from_str_radix(value.trim(), 16)
                        .map_err(|e| format!("bad argb {value:?}: {e}"))?,
                )
            }
            "display" => fixture.display = Some(value.to_string()),
            other => return Err(format!("unknown key {other:?}")),
        }
    }
    if fixture.kind.is_empty() {
        return Err("fixture has no `kind`".to_string());
    }
    Ok(fixture)
}

fn check_kind(color: &Color, kind: &str) -> Result<(), String> {
    let ok = match kind {
        "empty" => color.is_empty(),
        "known" => color.is_known_color() && !color.is_system_color(),
        "system" => color.is_system_color(),
        "named" => color.is_named_color() && !color.is_known_color(),
        "argb" => !color.is_empty() && !color.is_named_color(),
        other => return Err(format!("unknown kind {other:?}")),
    };
    if ok {
        Ok(())
    } else {
        Err(format!("expected a {kind} color, got {color:?}"))
    }
}

fn test_color_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let fixture = parse_fixture(&std::fs::read_to_string(path)?)?;
    let culture = match fixture.separator {
        Some(separator) => Culture::new('.', separator),
        None => Culture::INVARIANT,
    };
    tracing::debug!(?fixture, "running color fixture");

    let result = ColorConverter::from_str_with(&fixture.input, &culture);
    if fixture.kind == "error" {
        return match result {
            Err(_) => Ok(()),
            Ok(color) => Err(format!("{path}: expected an error, parsed {color:?}").into()),
        };
    }

    let color = result.map_err(|e| format!("{path}: {:?}", miette::Report::new(e)))?;
    check_kind(&color, &fixture.kind).map_err(|e| format!("{path}: {e}"))?;

    if let Some(name) = &fixture.name {
        if color.name() != name.as_str() {
            return Err(format!("{path}: name {:?}, expected {name:?}", color.name()).into());
        }
    }
    if let Some(argb) = fixture.argb {
        if color.to_argb() as u32 != argb {
            return Err(
                format!("{path}: argb {:08X}, expected {argb:08X}", color.to_argb()).into(),
            );
        }
    }
    if let Some(display) = &fixture.display {
        let formatted = ColorConverter::to_string_with(&color, &culture);
        if &formatted != display {
            return Err(format!("{path}: formatted {formatted:?}, expected {display:?}").into());
        }
        // the formatted text must come back as the same color
        let reparsed = ColorConverter::from_str_with(&formatted, &culture)?;
        if reparsed != color {
            return Err(format!("{path}: {formatted:?} parsed back as {reparsed:?}").into());
        }
    }
    Ok(())
}

datatest_stable::harness! {
    { test = test_color_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/colors"), pattern = r"\.color$" },
}
