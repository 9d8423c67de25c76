//! Source file handle and metadata derivation.
//!
//! The extractor needs the document image's declared attributes (content
//! type, byte size, last-modified timestamp) to fill the record's metadata.
//! Content is never inspected.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::models::identity::FileMetadata;

/// Handle to the document image a piece of OCR text was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Declared content type (MIME).
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Last-modified timestamp, when known.
    pub modified: Option<DateTime<Local>>,
}

impl SourceFile {
    /// Create a handle from explicit attributes.
    pub fn new(
        content_type: impl Into<String>,
        size: u64,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            size,
            modified,
        }
    }

    /// Create a handle from a file on disk.
    ///
    /// Byte size and mtime come from the filesystem; the content type is
    /// mapped from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        let modified = meta.modified().ok().map(DateTime::<Local>::from);

        Ok(Self {
            content_type: content_type_for(path),
            size: meta.len(),
            modified,
        })
    }

    /// Derive the metadata sub-record for the output identity.
    pub fn metadata(&self) -> FileMetadata {
        FileMetadata {
            file_type: self.content_type.clone(),
            file_size: format_file_size(self.size),
            created: self
                .modified
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "tiff" | "tif" => "image/tiff",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Format a byte count in the largest fitting 1024-based unit.
///
/// Values are rounded to two decimal places with trailing zeros trimmed;
/// zero bytes is the literal `"0 Bytes"`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exp = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);

    let formatted = format!("{value:.2}");
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", formatted, UNITS[exp as usize])
}
