//! Full-name extraction, including split last/first label layouts.

use super::patterns::{NAME_FN_FIRST, NAME_HONORIFIC, NAME_LABELED, NAME_LN_FIRST};
use super::{FieldExtractor, first_capture};

/// Full-name field extractor.
///
/// The general list looks for a labeled name phrase or an honorific-prefixed
/// phrase. A separate two-part check handles layouts that label last and
/// first name as separate tokens (`LN`/`FN`); when it matches, it overrides
/// the general result, because such layouts often never print a single
/// full-name phrase.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Two-part last/first check.
    ///
    /// Output is always `first last`; which capture is the last name is
    /// decided by which label leads the matched span. This span-order rule
    /// is a heuristic, not a guaranteed parse of arbitrary ID layouts.
    fn split_name(text: &str) -> Option<String> {
        if let Some(caps) = NAME_LN_FIRST.captures(text) {
            return Some(format!("{} {}", caps[2].trim(), caps[1].trim()));
        }

        if let Some(caps) = NAME_FN_FIRST.captures(text) {
            return Some(format!("{} {}", caps[1].trim(), caps[2].trim()));
        }

        None
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        let general = first_capture(text, &[&NAME_LABELED, &NAME_HONORIFIC]);
        Self::split_name(text).or(general)
    }
}
