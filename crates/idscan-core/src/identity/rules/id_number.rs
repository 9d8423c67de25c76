//! Document/ID number extraction.
//!
//! Like dates, ID numbers carry no checksum or format validation; the token
//! is handed through for human review.

use regex::Regex;

use super::patterns::{ID_BOUNDED, ID_LABELED, ID_LICENSE};
use super::{FieldExtractor, first_capture};

/// ID-number field extractor.
pub struct IdNumberExtractor;

impl IdNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn patterns() -> [&'static Regex; 3] {
        [&ID_LABELED, &ID_BOUNDED, &ID_LICENSE]
    }
}

impl Default for IdNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdNumberExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        first_capture(text, &Self::patterns())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_labeled_id() {
        let extractor = IdNumberExtractor::new();

        assert_eq!(
            extractor.extract("ID: ABC123456"),
            Some("ABC123456".to_string())
        );
        assert_eq!(
            extractor.extract("License # X-99-1234"),
            Some("X-99-1234".to_string())
        );
        assert_eq!(
            extractor.extract("Documento: 12345678"),
            Some("12345678".to_string())
        );
    }

    #[test]
    fn test_drivers_license_prefix() {
        let extractor = IdNumberExtractor::new();

        assert_eq!(
            extractor.extract("DL. W9802660"),
            Some("W9802660".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        let extractor = IdNumberExtractor::new();

        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("Sex: M"), None);
    }
}
