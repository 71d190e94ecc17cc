//! # tint
//!
//! Lexical syntax highlighting for documentation sites.
//!
//! This crate turns a raw source-code string plus a language tag into an
//! ordered sequence of classified [tokens](highlight::Token) suitable for
//! presentation. It deliberately stops there: no AST, no validation, no
//! diagnostics. A renderer (see the `tint-render` crate) consumes the token
//! sequence and paints it; concatenating the token texts always reproduces
//! the input byte for byte, so the original source is never lost to styling.
//!
//! ## Testing
//!
//! Tokenizer tests assert on `(kind, text)` sequences via the helpers in
//! [highlight::testing]; every test that feeds a tokenizer should also
//! assert the coverage invariant with
//! [assert_coverage](highlight::testing::assert_coverage).

pub mod highlight;
