//! Identity record produced by extraction.

use serde::{Deserialize, Serialize};

/// Sentinel value for a field no pattern matched.
///
/// Identity fields are plain strings rather than options so downstream
/// display code never needs null handling; a soft non-match degrades to
/// this constant.
pub const NOT_DETECTED: &str = "Not detected";

/// A structured identity record extracted from one document image.
///
/// Built once per extraction call and immutable thereafter. Every identity
/// field is always present; absence of a confident match is represented by
/// [`NOT_DETECTED`], never by omission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIdentity {
    /// Full name as matched in the text, or the sentinel.
    pub full_name: String,

    /// Date of birth as matched in the text, without validation or
    /// normalization, or the sentinel.
    pub date_of_birth: String,

    /// Gender, single letter or spelled out, or the sentinel.
    pub gender: String,

    /// Document/ID number, or the sentinel.
    pub id_number: String,

    /// Metadata derived from the source file's own attributes.
    pub metadata: FileMetadata,

    /// Full normalized OCR text, retained verbatim for audit/display.
    pub raw_text: String,
}

impl ExtractedIdentity {
    /// Names of identity fields that fell back to the sentinel.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name == NOT_DETECTED {
            missing.push("full name");
        }
        if self.date_of_birth == NOT_DETECTED {
            missing.push("date of birth");
        }
        if self.gender == NOT_DETECTED {
            missing.push("gender");
        }
        if self.id_number == NOT_DETECTED {
            missing.push("ID number");
        }
        missing
    }
}

/// Metadata about the source document file.
///
/// Derived from the file handle's declared attributes only; the file's
/// content is never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Declared content type.
    pub file_type: String,

    /// Human-readable size in the largest fitting 1024-based unit.
    pub file_size: String,

    /// Last-modified timestamp, formatted for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}
