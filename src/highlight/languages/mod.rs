//! Per-language tokenizers
//!
//! One module per supported language. Each exposes a single
//! `tokenize(source) -> Vec<Token>` entry point built on the shared
//! [scan driver](crate::highlight::scanner); the dispatcher in
//! [highlight](crate::highlight) owns the mapping from language tags to
//! these entry points.

pub mod bash;
pub mod python;
pub mod yaml;
