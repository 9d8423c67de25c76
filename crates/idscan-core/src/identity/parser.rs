//! Identity parser assembling the full record from OCR text.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::identity::{ExtractedIdentity, NOT_DETECTED};
use crate::normalize::normalize_markup;
use crate::source::SourceFile;

use super::rules::{
    DobExtractor, FieldExtractor, GenderExtractor, IdNumberExtractor, NameExtractor,
};
use super::{IdentityExtractor, Result};

/// Result of an identity extraction.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted identity record.
    pub identity: ExtractedIdentity,
    /// One warning per field that degraded to the sentinel.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based identity parser.
///
/// A pure computation over the input text and source-file attributes: no
/// I/O, no shared mutable state. Safe to call concurrently from any number
/// of call sites.
pub struct IdentityParser {
    name: NameExtractor,
    dob: DobExtractor,
    gender: GenderExtractor,
    id_number: IdNumberExtractor,
}

impl IdentityParser {
    /// Create a new parser with the built-in pattern lists.
    pub fn new() -> Self {
        Self {
            name: NameExtractor::new(),
            dob: DobExtractor::new(),
            gender: GenderExtractor::new(),
            id_number: IdNumberExtractor::new(),
        }
    }

    /// Parse raw OCR text into a full extraction report.
    ///
    /// The text is normalized before any pattern runs, and the normalized
    /// form is what `raw_text` retains. Fields degrade independently to the
    /// sentinel; the only error is a missing source file, since file
    /// metadata is a mandatory part of the record. On that error no partial
    /// record is produced.
    pub fn parse(&self, text: &str, source: Option<&SourceFile>) -> Result<ExtractionReport> {
        let start = Instant::now();

        let source = source.ok_or(ExtractionError::MissingSourceFile)?;

        let text = normalize_markup(text);
        info!("Parsing identity fields from {} characters of text", text.len());

        let full_name = field_or_sentinel(self.name.extract(&text));
        let date_of_birth = field_or_sentinel(self.dob.extract(&text));
        let gender = field_or_sentinel(self.gender.extract(&text));
        let id_number = field_or_sentinel(self.id_number.extract(&text));

        let identity = ExtractedIdentity {
            full_name,
            date_of_birth,
            gender,
            id_number,
            metadata: source.metadata(),
            raw_text: text,
        };

        let warnings: Vec<String> = identity
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {field}"))
            .collect();

        debug!(
            "Extracted identity with {} of 4 fields detected",
            4 - warnings.len()
        );

        Ok(ExtractionReport {
            identity,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for IdentityParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityExtractor for IdentityParser {
    fn extract(&self, text: &str, source: Option<&SourceFile>) -> Result<ExtractedIdentity> {
        self.parse(text, source).map(|report| report.identity)
    }
}

fn field_or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_DETECTED.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn source() -> SourceFile {
        SourceFile::new("image/jpeg", 1536, None)
    }

    #[test]
    fn test_parse_basic_id_card() {
        let text = r#"
            IDENTITY CARD

            Name: John Smith
            DOB: 01/02/1990
            Sex: M
            ID: ABC123456
        "#;

        let parser = IdentityParser::new();
        let report = parser.parse(text, Some(&source())).unwrap();

        assert_eq!(report.identity.full_name, "John Smith");
        assert_eq!(report.identity.date_of_birth, "01/02/1990");
        assert_eq!(report.identity.gender, "M");
        assert_eq!(report.identity.id_number, "ABC123456");
        assert_eq!(report.identity.metadata.file_size, "1.5 KB");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_parse_partial_match_warns() {
        let parser = IdentityParser::new();
        let report = parser.parse("Name: John Smith", Some(&source())).unwrap();

        assert_eq!(report.identity.full_name, "John Smith");
        assert_eq!(report.identity.date_of_birth, NOT_DETECTED);
        assert_eq!(report.identity.gender, NOT_DETECTED);
        assert_eq!(report.identity.id_number, NOT_DETECTED);
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_parse_without_source_file() {
        let parser = IdentityParser::new();

        assert!(matches!(
            parser.parse("Name: John Smith", None),
            Err(ExtractionError::MissingSourceFile)
        ));
    }

    #[test]
    fn test_parse_normalizes_before_matching() {
        let parser = IdentityParser::new();
        let report = parser.parse("**Name:** John", Some(&source())).unwrap();

        assert_eq!(report.identity.full_name, "John");
        assert_eq!(report.identity.raw_text, "Name: John");
    }
}
