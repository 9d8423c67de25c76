//! Rule-based field extractors for identity documents.
//!
//! Each field owns an ordered list of compiled patterns, most specific
//! first, evaluated with a first-success-wins combinator. No field match is
//! ever an error; callers substitute the sentinel for `None`.

pub mod dob;
pub mod gender;
pub mod id_number;
pub mod name;
pub mod patterns;

pub use dob::DobExtractor;
pub use gender::GenderExtractor;
pub use id_number::IdNumberExtractor;
pub use name::NameExtractor;

use regex::Regex;

/// Trait for single-field extractors.
pub trait FieldExtractor {
    /// Extract the field from normalized text, if any pattern matches.
    fn extract(&self, text: &str) -> Option<String>;
}

/// First-success-wins combinator over an ordered pattern list.
///
/// The first capturing group of the first matching pattern becomes the
/// value, trimmed of surrounding whitespace.
pub(crate) fn first_capture(text: &str, patterns: &[&Regex]) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
