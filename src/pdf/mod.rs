//! PDF font extraction module

pub mod content;
pub mod form;
pub mod source;
pub mod tokens;


use std::path::Path;

use lopdf::Document;

use crate::error::{ExtractionFailure, Result};

// Re-export commonly used items
pub use content::{extract_text_fonts, scan_text_fonts, PageFonts, TextFontOutput, TextFontReport};
pub use form::{extract_font_info, extract_form_fonts, FieldFontInfo, FormFontOutput, FormFontReport};
pub use source::PdfSource;
pub use tokens::FontUsage;

/// Load a PDF from disk, failing early if the path does not exist
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(ExtractionFailure::FileNotFound(path.to_path_buf()));
    }

    log::debug!("Loading {}", path.display());
    let doc = Document::load(path)?;
    log::debug!("Loaded {} objects", doc.objects.len());

    Ok(doc)
}
