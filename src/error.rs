//! Error types for PDF font extraction

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ExtractionFailure>;

/// Any failure that aborts an extraction
///
/// Font-size tokens that fail to parse are not failures; they are skipped
/// during scanning and never surface here.
#[derive(Error, Debug)]
pub enum ExtractionFailure {
    /// PDF processing error (load, object lookup, stream decoding)
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Indirect references nest too deeply (or loop)
    #[error("Reference chain too deep at object {0} {1} R")]
    ReferenceDepth(u32, u16),

    /// The object graph has an unexpected shape
    #[error("Unexpected object type for {what}: expected {expected}, found {found}")]
    UnexpectedType {
        what: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
