//! Whitespace token scanning for `Tf` operands
//!
//! These helpers do not parse PDF syntax. They split already-decoded text on
//! whitespace and look at the tokens directly before each literal `Tf`, so
//! string literals, comments and arrays are not recognised.

use lopdf::Object;
use serde::Serialize;

/// The text-font-selection operator
const TF_OPERATOR: &str = "Tf";

/// A `(font name, font size)` pair seen before a `Tf` operator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontUsage {
    /// Font resource name, as written (e.g. `/F1`)
    pub font: String,
    /// Font size in points
    pub size: f64,
}

impl FontUsage {
    /// Format as `<font>@<size>pt`, e.g. `/F1@10.0pt`
    pub fn label(&self) -> String {
        format!("{}@{:?}pt", self.font, self.size)
    }
}

/// Split text into whitespace-separated tokens
///
/// Besides Unicode whitespace, the ASCII separator controls `\x1c`..=`\x1f`
/// also split tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse a font size token
///
/// Returns `None` for anything that is not a number; such tokens are
/// expected noise, not errors. `nan` and `inf` parse like any other number.
pub fn parse_font_size(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Extract the font size from a default appearance (DA) string
///
/// Every `Tf` is considered and the last one with a numeric operand wins,
/// so `/F1 10 Tf /F2 14 Tf` yields `14.0`.
pub fn last_tf_size(da: &str) -> Option<f64> {
    let tokens = tokenize(da);
    let mut size = None;

    for (i, token) in tokens.iter().enumerate() {
        if *token == TF_OPERATOR && i > 0 {
            match parse_font_size(tokens[i - 1]) {
                Some(parsed) => size = Some(parsed),
                None => log::trace!("Ignoring non-numeric Tf operand {:?}", tokens[i - 1]),
            }
        }
    }

    size
}

/// Collect every `<font> <size> Tf` triple in decoded content stream text
///
/// The text is split into lines first; a triple never spans a line break.
/// Results are in order of appearance.
pub fn scan_tf_operands(text: &str) -> Vec<FontUsage> {
    let mut usages = Vec::new();

    for line in text.split('\n') {
        let tokens = tokenize(line);
        for (i, token) in tokens.iter().enumerate() {
            if *token != TF_OPERATOR || i < 2 {
                continue;
            }
            if let Some(size) = parse_font_size(tokens[i - 1]) {
                usages.push(FontUsage {
                    font: tokens[i - 2].to_string(),
                    size,
                });
            }
        }
    }

    usages
}

/// Decode bytes as Latin-1; every byte maps to exactly one char
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Render a PDF string or name object as text
///
/// Strings are decoded by their byte order mark (UTF-16BE, UTF-8) or as
/// PDFDocEncoding. Names render with their leading slash. Other object
/// types, and strings that fail to decode, have no text form here.
pub fn pdf_text_string(obj: &Object) -> Option<String> {
    match obj {
        Object::String(..) => match lopdf::decode_text_string(obj) {
            Ok(text) => Some(text),
            Err(e) => {
                log::trace!("Undecodable text string: {}", e);
                None
            }
        },
        Object::Name(name) => Some(format!("/{}", latin1_to_string(name))),
        _ => None,
    }
}
