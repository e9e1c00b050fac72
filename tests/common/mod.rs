//! Shared helpers for writing test PDFs to disk

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};

/// Builds a small PDF with pages, content streams and an optional AcroForm
pub struct TestPdf {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    acro_form: Option<Dictionary>,
    compress: bool,
}

impl TestPdf {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            acro_form: None,
            compress: false,
        }
    }

    /// Flate-compress streams when saving
    pub fn compressed(mut self) -> Self {
        self.compress = true;
        self
    }

    pub fn add<T: Into<Object>>(&mut self, object: T) -> Object {
        Object::Reference(self.doc.add_object(object))
    }

    /// Add a page whose `/Contents` is one stream per entry in `streams`
    pub fn page(&mut self, streams: &[&str]) -> &mut Self {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(self.pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        };

        let refs: Vec<Object> = streams
            .iter()
            .map(|content| self.add(Stream::new(dictionary! {}, content.as_bytes().to_vec())))
            .collect();
        match refs.len() {
            0 => {}
            1 => {
                page.set("Contents", refs[0].clone());
            }
            _ => {
                page.set("Contents", refs);
            }
        }

        let page_ref = self.add(page);
        self.kids.push(page_ref);
        self
    }

    /// Add a text field and return a reference to it
    pub fn field(&mut self, name: &str, da: Option<&str>, kids: Vec<Object>) -> Object {
        let mut field = dictionary! {
            "FT" => "Tx",
            "T" => Object::string_literal(name),
        };
        if let Some(da) = da {
            field.set("DA", Object::string_literal(da));
        }
        if !kids.is_empty() {
            field.set("Kids", kids);
        }
        self.add(field)
    }

    pub fn acro_form(&mut self, da: Option<&str>, fields: Vec<Object>) -> &mut Self {
        let mut acro_form = dictionary! { "Fields" => fields };
        if let Some(da) = da {
            acro_form.set("DA", Object::string_literal(da));
        }
        self.acro_form = Some(acro_form);
        self
    }

    /// Write the document to `dir/name` and return the path
    pub fn save(mut self, dir: &Path, name: &str) -> PathBuf {
        let count = self.kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.kids,
            "Count" => count,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(self.pages_id),
        };
        if let Some(acro_form) = self.acro_form {
            let acro_form_id = self.doc.add_object(acro_form);
            catalog.set("AcroForm", Object::Reference(acro_form_id));
        }
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        if self.compress {
            self.doc.compress();
        }

        let path = dir.join(name);
        self.doc.save(&path).expect("Failed to save test PDF");
        path
    }
}

/// A two-page form document used by several tests
///
/// Page 1 selects /F1 at 10pt and /F2 at 14pt, page 2 has no text.
pub fn sample_form(dir: &Path) -> PathBuf {
    let mut pdf = TestPdf::new();
    pdf.page(&["BT\n/F1 10 Tf (Hello) Tj /F2 14 Tf (World) Tj\nET"]);
    pdf.page(&["0 0 m 10 10 l S"]);
    let name = pdf.field("name", Some("/Helv 0 Tf 0 g"), vec![]);
    let age = pdf.field("age", None, vec![]);
    pdf.acro_form(Some("/Helv 12 Tf 0 g"), vec![name, age]);
    pdf.save(dir, "form.pdf")
}
