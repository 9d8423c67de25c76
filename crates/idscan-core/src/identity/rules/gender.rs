//! Gender extraction.

use regex::Regex;

use super::patterns::{GENDER_BEFORE_KEYWORD, GENDER_LABELED, GENDER_TERSE};
use super::{FieldExtractor, first_capture};

/// Gender field extractor.
///
/// Accepts single-letter and spelled-out values, English or Portuguese.
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }

    fn patterns() -> [&'static Regex; 3] {
        [&GENDER_LABELED, &GENDER_BEFORE_KEYWORD, &GENDER_TERSE]
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        first_capture(text, &Self::patterns())
    }
}
