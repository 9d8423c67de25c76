//! Normalization of markdown-ish OCR output into plain text.
//!
//! OCR providers return lightly marked-up text (heading markers, emphasis,
//! link syntax). Field matching is line/phrase oriented and must not be
//! confused by markup noise, so markup is stripped before any pattern runs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref NEWLINE_RUN: Regex = Regex::new(r"\n+").unwrap();
}

/// Convert raw OCR output into plain text suitable for pattern matching.
///
/// Applied in order: strip heading markers at line start, remove bold
/// markers, remove italic markers, replace link constructs with their
/// visible text, collapse newline runs into a single newline, trim
/// surrounding whitespace. Empty input yields empty output; already-plain
/// text passes through unchanged.
pub fn normalize_markup(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = text.replace("**", "");
    let text = text.replace('*', "");
    let text = LINK.replace_all(&text, "$1");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}
