//! Error types for the idscan-core library.

use thiserror::Error;

/// Main error type for the idscan library.
#[derive(Error, Debug)]
pub enum IdscanError {
    /// Identity extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to identity field extraction.
///
/// A field no pattern matched is not an error; it degrades to the
/// [`NOT_DETECTED`](crate::models::identity::NOT_DETECTED) sentinel so
/// partial records still flow through for human review.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Extraction was invoked without a source file handle.
    ///
    /// File metadata is a mandatory part of the output record, so this is
    /// fatal to the call and no partial record is produced.
    #[error("no source file selected")]
    MissingSourceFile,
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdscanError>;
