//! Identity field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionReport, IdentityParser};

use crate::error::ExtractionError;
use crate::models::identity::ExtractedIdentity;
use crate::source::SourceFile;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for identity extractors.
pub trait IdentityExtractor {
    /// Extract an identity record from raw OCR text and its source file.
    fn extract(&self, text: &str, source: Option<&SourceFile>) -> Result<ExtractedIdentity>;
}
