//! Data models for extracted identity records.

pub mod identity;

pub use identity::{ExtractedIdentity, FileMetadata, NOT_DETECTED};
