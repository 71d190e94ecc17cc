//! Command-line interface for tint
//! This binary highlights a source file and prints the rendered output.
//!
//! Usage:
//!   tint `<path>` [--lang `<language>`] [--format `<format>`] [--theme `<file>`]
//!   tint --list-languages                 - List languages with a tokenizer
//!   tint --list-formats                   - List available output formats
//!
//! An unrecognized language is not an error: the file content is printed
//! verbatim (escaped for HTML formats), with no styling.

use std::path::Path;

use clap::{Arg, ArgAction, Command};
use tint::highlight::SUPPORTED_LANGUAGES;
use tint_render::{RendererRegistry, Theme};

fn main() {
    let matches = Command::new("tint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A syntax highlighter for documentation code snippets")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required_unless_present_any(["list-languages", "list-formats"])
                .index(1),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Language tag (default: guessed from the file extension)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("html"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .short('t')
                .help("YAML theme file mapping token kinds to #rrggbb colors"),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List languages with a tokenizer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-languages") {
        handle_list_languages_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing");
    let format = matches.get_one::<String>("format").unwrap();
    let lang = matches.get_one::<String>("lang").cloned();
    let theme_path = matches.get_one::<String>("theme").cloned();
    handle_render_command(path, lang.as_deref(), format, theme_path.as_deref());
}

/// Handle the render command
fn handle_render_command(path: &str, lang: Option<&str>, format: &str, theme_path: Option<&str>) {
    let code = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let language = match lang {
        Some(lang) => lang.to_string(),
        None => guess_language(path),
    };

    let theme = match theme_path {
        Some(theme_path) => {
            let source = std::fs::read_to_string(theme_path).unwrap_or_else(|e| {
                eprintln!("Error reading theme {}: {}", theme_path, e);
                std::process::exit(1);
            });
            Theme::from_yaml(&source).unwrap_or_else(|e| {
                eprintln!("Error in theme {}: {}", theme_path, e);
                std::process::exit(1);
            })
        }
        None => Theme::default(),
    };

    let registry = RendererRegistry::with_defaults();
    let output = registry
        .render(&code, &language, format, &theme)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_renderers() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Map a file extension to a language tag. An unknown extension maps to
/// the extension itself, which the dispatcher will treat as uncovered and
/// the renderer will fall back to verbatim output.
fn guess_language(path: &str) -> String {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match extension {
        "py" => "python".to_string(),
        "sh" | "bash" => "bash".to_string(),
        "yml" | "yaml" => "yaml".to_string(),
        other => other.to_string(),
    }
}

/// Handle the list-languages command
fn handle_list_languages_command() {
    println!("Languages with a tokenizer:\n");
    for language in SUPPORTED_LANGUAGES {
        println!("  {}", language);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = RendererRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_renderers() {
        let renderer = registry.get(&name).expect("listed renderer exists");
        println!("  {}", name);
        println!("    {}", renderer.description());
        println!();
    }
}
