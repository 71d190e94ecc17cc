//! Verbatim-fallback tests across every renderer
//!
//! Whatever the output format, an unrecognized language must surface the
//! original code with no token-level styling.

use rstest::rstest;
use tint_render::{RendererRegistry, Theme};

#[rstest(renderer => ["html", "html-doc", "ansi", "json", "text"])]
fn test_unsupported_language_carries_code_through(renderer: &str) {
    let registry = RendererRegistry::with_defaults();
    let code = "IDENTIFICATION DIVISION.";

    let out = registry
        .render(code, "cobol", renderer, &Theme::default())
        .expect("fallback must not error");
    assert!(
        out.contains(code),
        "renderer {} lost the original code: {}",
        renderer,
        out
    );
    assert!(
        !out.contains("<span") && !out.contains('\u{1b}'),
        "renderer {} styled an unsupported language",
        renderer
    );
}

#[rstest(renderer => ["ansi", "text"])]
fn test_unsupported_language_is_byte_identical(renderer: &str) {
    let registry = RendererRegistry::with_defaults();
    let code = "  indented\n\ttabbed\n\ntrailing  ";

    let out = registry
        .render(code, "cobol", renderer, &Theme::default())
        .expect("fallback must not error");
    assert_eq!(out, code, "renderer {} altered whitespace", renderer);
}
