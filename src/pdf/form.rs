//! Font sizes declared by interactive forms (AcroForm)

use std::path::Path;

use serde::Serialize;

use super::load_document;
use super::source::{text_entry, PdfSource};
use super::tokens::last_tf_size;
use crate::error::Result;

/// Font size declared by one form field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFontInfo {
    /// Fully qualified field name
    pub name: String,
    /// Size from the field's own DA string; `0.0` means auto-size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Form-wide default font size plus per-field sizes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFontReport {
    /// Fields in enumeration order
    pub fields: Vec<FieldFontInfo>,
    /// Size from the AcroForm DA string (serialized as `null` when absent)
    pub default_font_size: Option<f64>,
}

/// JSON document printed by `extract-font-info`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FormFontOutput {
    Report(FormFontReport),
    Failure {
        error: String,
        fields: Vec<FieldFontInfo>,
    },
}

impl From<Result<FormFontReport>> for FormFontOutput {
    fn from(result: Result<FormFontReport>) -> Self {
        match result {
            Ok(report) => FormFontOutput::Report(report),
            Err(err) => FormFontOutput::Failure {
                error: err.to_string(),
                fields: Vec::new(),
            },
        }
    }
}

/// Extract form font sizes from a PDF file
///
/// # Example
///
/// ```no_run
/// use pdf_font_info::pdf::extract_font_info;
/// use std::path::Path;
///
/// let report = extract_font_info(Path::new("form.pdf")).expect("Failed to read form");
/// println!("default: {:?}", report.default_font_size);
/// for field in &report.fields {
///     println!("{}: {:?}", field.name, field.font_size);
/// }
/// ```
pub fn extract_font_info(path: &Path) -> Result<FormFontReport> {
    let doc = load_document(path)?;
    extract_form_fonts(&doc)
}

/// Extract form font sizes from an already loaded document
pub fn extract_form_fonts<S: PdfSource + ?Sized>(source: &S) -> Result<FormFontReport> {
    let mut default_font_size = None;

    if let Some(acro_form) = source.acro_form()? {
        if let Some(da) = text_entry(source, acro_form, b"DA")? {
            default_font_size = last_tf_size(&da);
        }
    } else {
        log::debug!("Document has no AcroForm");
    }

    let fields = source
        .enumerate_fields()?
        .into_iter()
        .map(|(name, dict)| -> Result<FieldFontInfo> {
            let font_size = text_entry(source, dict, b"DA")?
                .as_deref()
                .and_then(last_tf_size);
            Ok(FieldFontInfo { name, font_size })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Found {} form fields, default font size {:?}",
        fields.len(),
        default_font_size
    );

    Ok(FormFontReport {
        fields,
        default_font_size,
    })
}
