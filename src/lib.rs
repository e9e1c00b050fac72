//! PDF Font Info Library
//!
//! Read-only font metadata queries over a parsed PDF:
//! - Form-wide default font size from the AcroForm default appearance string
//! - Per-field font sizes from interactive form fields
//! - Font name/size pairs selected with `Tf` in page content streams
//!
//! # Example
//!
//! ```no_run
//! use pdf_font_info::pdf::{extract_font_info, extract_text_fonts};
//! use std::path::Path;
//!
//! let form = extract_font_info(Path::new("form.pdf")).expect("Failed to read form");
//! println!("Default font size: {:?}", form.default_font_size);
//!
//! let text = extract_text_fonts(Path::new("form.pdf")).expect("Failed to scan pages");
//! println!("Fonts used: {:?}", text.fonts_used);
//! ```

pub mod error;
pub mod pdf;

// Re-export commonly used items
pub use error::{ExtractionFailure, Result};
