//! Fonts selected in page content streams

use std::collections::BTreeSet;
use std::path::Path;

use lopdf::{Dictionary, Object, Stream};
use serde::Serialize;

use super::load_document;
use super::source::{expect_dict, PdfSource};
use super::tokens::{latin1_to_string, scan_tf_operands, FontUsage};
use crate::error::Result;

/// Fonts selected on one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFonts {
    /// 1-based page number
    pub page: usize,
    /// Usages in the order they were found
    pub fonts: Vec<FontUsage>,
}

/// Per-page font usage plus the document-wide set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFontReport {
    /// Only pages with at least one usage
    pub pages: Vec<PageFonts>,
    /// Sorted, deduplicated `<font>@<size>pt` labels
    pub fonts_used: Vec<String>,
}

/// JSON document printed by `extract-text-fonts`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TextFontOutput {
    Report(TextFontReport),
    Failure { error: String, pages: Vec<PageFonts> },
}

impl From<Result<TextFontReport>> for TextFontOutput {
    fn from(result: Result<TextFontReport>) -> Self {
        match result {
            Ok(report) => TextFontOutput::Report(report),
            Err(err) => TextFontOutput::Failure {
                error: err.to_string(),
                pages: Vec::new(),
            },
        }
    }
}

/// Scan the content streams of a PDF file for `Tf` operators
///
/// # Example
///
/// ```no_run
/// use pdf_font_info::pdf::extract_text_fonts;
/// use std::path::Path;
///
/// let report = extract_text_fonts(Path::new("input.pdf")).expect("Failed to scan");
/// for label in &report.fonts_used {
///     println!("{}", label);
/// }
/// ```
pub fn extract_text_fonts(path: &Path) -> Result<TextFontReport> {
    let doc = load_document(path)?;
    scan_text_fonts(&doc)
}

/// Scan an already loaded document
pub fn scan_text_fonts<S: PdfSource + ?Sized>(source: &S) -> Result<TextFontReport> {
    let mut pages = Vec::new();
    let mut fonts_used = BTreeSet::new();

    for (index, page_id) in source.page_ids().into_iter().enumerate() {
        let page = expect_dict(source.lookup_object(page_id)?, "page")?;

        let mut fonts = Vec::new();
        for stream in page_content_streams(source, page)? {
            let text = latin1_to_string(&source.decode_stream_bytes(stream)?);
            fonts.extend(scan_tf_operands(&text));
        }

        log::debug!("Page {}: {} font selections", index + 1, fonts.len());

        if fonts.is_empty() {
            continue;
        }
        fonts_used.extend(fonts.iter().map(FontUsage::label));
        pages.push(PageFonts {
            page: index + 1,
            fonts,
        });
    }

    Ok(TextFontReport {
        pages,
        fonts_used: fonts_used.into_iter().collect(),
    })
}

/// Resolve a page's `/Contents` to its streams
///
/// Each element of a contents array is its own stream; they are not
/// concatenated. Elements that are not streams are skipped.
fn page_content_streams<'a, S: PdfSource + ?Sized>(
    source: &'a S,
    page: &'a Dictionary,
) -> Result<Vec<&'a Stream>> {
    let contents = match page.get(b"Contents") {
        Ok(contents) => contents,
        Err(_) => return Ok(Vec::new()),
    };

    let objects = match source.resolve_reference(contents)? {
        Object::Array(items) => items
            .iter()
            .map(|item| source.resolve_reference(item))
            .collect::<Result<Vec<_>>>()?,
        single => vec![single],
    };

    Ok(objects
        .into_iter()
        .filter_map(|obj| match obj {
            Object::Stream(stream) => Some(stream),
            _ => {
                log::trace!("Skipping non-stream content object");
                None
            }
        })
        .collect())
}
