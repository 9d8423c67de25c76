//! Core library for identity document field extraction.
//!
//! This crate provides:
//! - Normalization of markdown-ish OCR output into plain text
//! - Rule-based extraction of identity fields (full name, date of birth,
//!   gender, ID number) with a fixed "Not detected" sentinel on non-match
//! - File metadata derivation from the source document image
//!
//! Extraction is a pure, synchronous computation: no I/O, no shared state.
//! The OCR provider, upload pipeline, and minting flow that surround it in
//! an application are collaborators of this crate, not part of it.

pub mod error;
pub mod identity;
pub mod models;
pub mod normalize;
pub mod source;

pub use error::{ExtractionError, IdscanError, Result};
pub use identity::{ExtractionReport, IdentityExtractor, IdentityParser};
pub use models::identity::{ExtractedIdentity, FileMetadata, NOT_DETECTED};
pub use normalize::normalize_markup;
pub use source::{SourceFile, format_file_size};
