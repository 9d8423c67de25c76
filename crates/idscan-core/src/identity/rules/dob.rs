//! Date-of-birth extraction.
//!
//! The matched substring is returned verbatim: no calendar validation and
//! no normalization. The extractor is a best-effort text grab reviewed by a
//! human downstream, so `31/45/9999` would be accepted as-is.

use regex::Regex;

use super::patterns::{DOB_BEFORE_KEYWORD, DOB_ISO, DOB_LABELED, DOB_TERSE};
use super::{FieldExtractor, first_capture};

/// Date-of-birth field extractor.
pub struct DobExtractor;

impl DobExtractor {
    pub fn new() -> Self {
        Self
    }

    fn patterns() -> [&'static Regex; 4] {
        [&DOB_LABELED, &DOB_BEFORE_KEYWORD, &DOB_ISO, &DOB_TERSE]
    }
}

impl Default for DobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DobExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        first_capture(text, &Self::patterns())
    }
}
