use paintkit::{Color, ColorConverter, KnownColor, KnownColorCategory};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  colors          Print the known color table as markdown");
        eprintln!("  colors-html     Write a swatch page of all standard colors");
        eprintln!("  check           Run the tests with default features, then with tracing");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "colors" => print!("{}", color_table()),
        "colors-html" => colors_html(),
        "check" => check(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One row per known color, in index order.
fn color_table() -> String {
    let mut out = String::new();
    out.push_str("| Index | Name | ARGB | Category | Hue | Sat | Bri | Dark |\n");
    out.push_str("|---:|---|---|---|---:|---:|---:|---|\n");
    for &known in KnownColor::ALL {
        let color = Color::known(known);
        let kind = match known.category() {
            KnownColorCategory::System => "system",
            KnownColorCategory::Standard => "standard",
            KnownColorCategory::Web => "web",
        };
        let _ = writeln!(
            out,
            "| {} | {} | `{:08X}` | {} | {:.1} | {:.3} | {:.3} | {} |",
            known.index(),
            known.name(),
            known.argb(),
            kind,
            color.hue(),
            color.saturation(),
            color.brightness(),
            if color.is_dark() { "yes" } else { "" },
        );
    }
    out
}

fn colors_html() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let output_path = Path::new(manifest_dir).join("../colors.html");

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Standard colors</title>\n<style>\n");
    html.push_str("body { font-family: sans-serif; }\n");
    html.push_str(".grid { display: grid; grid-template-columns: repeat(auto-fill, 180px); gap: 8px; }\n");
    html.push_str(".swatch { height: 48px; border: 1px solid #888; }\n");
    html.push_str("</style>\n</head>\n<body>\n<div class=\"grid\">\n");

    for color in ColorConverter::standard_values() {
        let _ = writeln!(
            html,
            "<div><div class=\"swatch\" style=\"background: rgba({}, {}, {}, {:.3})\"></div>{}{}</div>",
            color.r(),
            color.g(),
            color.b(),
            f64::from(color.a()) / 255.0,
            color.name(),
            if color.is_system_color() { " (system)" } else { "" },
        );
    }

    html.push_str("</div>\n</body>\n</html>\n");

    if let Err(e) = fs::write(&output_path, html) {
        eprintln!("Failed to write {}: {}", output_path.display(), e);
        std::process::exit(1);
    }
    eprintln!("Wrote {}", output_path.display());
}

/// The `tracing` feature swaps out the logging macros, so both builds get
/// tested.
fn check() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let root = Path::new(manifest_dir).join("..");
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    let runs: [&[&str]; 2] = [
        &["test", "-p", "paintkit"],
        &["test", "-p", "paintkit", "--features", "tracing"],
    ];
    for args in runs {
        eprintln!("Running cargo {}", args.join(" "));
        let status = match Command::new(&cargo).args(args).current_dir(&root).status() {
            Ok(status) => status,
            Err(e) => {
                eprintln!("Failed to run {cargo}: {e}");
                std::process::exit(1);
            }
        };
        if !status.success() {
            eprintln!("cargo {} failed", args.join(" "));
            std::process::exit(status.code().unwrap_or(1));
        }
    }
}
