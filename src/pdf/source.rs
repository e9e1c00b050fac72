//! Read-only access to a parsed PDF object graph
//!
//! [`PdfSource`] is the capability interface the extractors run against.
//! `lopdf::Document` implements it; anything else that can hand out the
//! trailer, objects by id, page ids and decoded stream bytes works too.

use std::collections::HashSet;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::tokens::pdf_text_string;
use crate::error::{ExtractionFailure, Result};

/// Maximum number of reference hops followed before giving up
const MAX_REFERENCE_DEPTH: usize = 32;

/// A parsed PDF that can be queried without mutation
pub trait PdfSource {
    /// The trailer dictionary
    fn trailer(&self) -> &Dictionary;

    /// Look up an indirect object by id
    fn lookup_object(&self, id: ObjectId) -> Result<&Object>;

    /// Page object ids, in page order
    fn page_ids(&self) -> Vec<ObjectId>;

    /// Raw bytes of a stream with its filters applied
    fn decode_stream_bytes(&self, stream: &Stream) -> Result<Vec<u8>>;

    /// Follow indirect references until a direct object is reached
    fn resolve_reference<'a>(&'a self, obj: &'a Object) -> Result<&'a Object> {
        let mut current = obj;
        let mut last_id = None;

        for _ in 0..MAX_REFERENCE_DEPTH {
            match current {
                Object::Reference(id) => {
                    last_id = Some(*id);
                    current = self.lookup_object(*id)?;
                }
                _ => return Ok(current),
            }
        }

        let (number, generation) = last_id.unwrap_or((0, 0));
        Err(ExtractionFailure::ReferenceDepth(number, generation))
    }

    /// The document catalog, if the trailer has a `/Root`
    fn root_catalog(&self) -> Result<Option<&Dictionary>> {
        let root = match self.trailer().get(b"Root") {
            Ok(root) => root,
            Err(_) => return Ok(None),
        };

        expect_dict(self.resolve_reference(root)?, "catalog").map(Some)
    }

    /// The interactive form dictionary, if the catalog has an `/AcroForm`
    fn acro_form(&self) -> Result<Option<&Dictionary>> {
        let catalog = match self.root_catalog()? {
            Some(catalog) => catalog,
            None => return Ok(None),
        };

        match catalog.get(b"AcroForm") {
            Ok(acro_form) => expect_dict(self.resolve_reference(acro_form)?, "AcroForm").map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Interactive form fields keyed by qualified name
    ///
    /// Walks `/AcroForm /Fields` through `/Kids`, listing a field's kids
    /// before the field itself. The key is the field's `/TM` if present,
    /// otherwise its `/T` prefixed by the parent's key and a dot. Nodes
    /// with neither (widget annotations) are not listed. A repeated key
    /// replaces the earlier dictionary but keeps the earlier position.
    fn enumerate_fields(&self) -> Result<Vec<(String, &Dictionary)>> {
        let mut fields = Vec::new();

        let acro_form = match self.acro_form()? {
            Some(acro_form) => acro_form,
            None => return Ok(fields),
        };
        let roots = match acro_form.get(b"Fields") {
            Ok(roots) => expect_array(self.resolve_reference(roots)?, "AcroForm /Fields")?,
            Err(_) => return Ok(fields),
        };

        let mut visited = HashSet::new();
        for root in roots {
            collect_field(self, root, None, &mut visited, &mut fields)?;
        }

        Ok(fields)
    }
}

impl PdfSource for Document {
    fn trailer(&self) -> &Dictionary {
        &self.trailer
    }

    fn lookup_object(&self, id: ObjectId) -> Result<&Object> {
        Ok(self.get_object(id)?)
    }

    fn page_ids(&self) -> Vec<ObjectId> {
        self.get_pages().into_values().collect()
    }

    fn decode_stream_bytes(&self, stream: &Stream) -> Result<Vec<u8>> {
        if stream.dict.has(b"Filter") {
            Ok(stream.decompressed_content()?)
        } else {
            Ok(stream.content.clone())
        }
    }
}

/// Add one field node (and its kids) to `fields`
fn collect_field<'a, S: PdfSource + ?Sized>(
    source: &'a S,
    node: &'a Object,
    parent_name: Option<&str>,
    visited: &mut HashSet<ObjectId>,
    fields: &mut Vec<(String, &'a Dictionary)>,
) -> Result<()> {
    if let Object::Reference(id) = node {
        if !visited.insert(*id) {
            log::trace!("Skipping already visited field {:?}", id);
            return Ok(());
        }
    }

    let dict = expect_dict(source.resolve_reference(node)?, "form field")?;

    let mapping_name = text_entry(source, dict, b"TM")?;
    let partial_name = text_entry(source, dict, b"T")?;
    let name = mapping_name.or_else(|| {
        partial_name.map(|partial| match parent_name {
            Some(parent) => format!("{}.{}", parent, partial),
            None => partial,
        })
    });

    if let Ok(kids) = dict.get(b"Kids") {
        let kids = expect_array(source.resolve_reference(kids)?, "field /Kids")?;
        for kid in kids {
            collect_field(source, kid, name.as_deref(), visited, fields)?;
        }
    }

    if let Some(name) = name {
        match fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = dict,
            None => fields.push((name, dict)),
        }
    }

    Ok(())
}

/// Read a dictionary entry as text, resolving references
pub(crate) fn text_entry<S: PdfSource + ?Sized>(
    source: &S,
    dict: &Dictionary,
    key: &[u8],
) -> Result<Option<String>> {
    match dict.get(key) {
        Ok(value) => Ok(pdf_text_string(source.resolve_reference(value)?)),
        Err(_) => Ok(None),
    }
}

pub(crate) fn expect_dict<'a>(obj: &'a Object, what: &'static str) -> Result<&'a Dictionary> {
    match obj {
        Object::Dictionary(dict) => Ok(dict),
        other => Err(unexpected(other, what, "dictionary")),
    }
}

pub(crate) fn expect_array<'a>(obj: &'a Object, what: &'static str) -> Result<&'a Vec<Object>> {
    match obj {
        Object::Array(array) => Ok(array),
        other => Err(unexpected(other, what, "array")),
    }
}

fn unexpected(found: &Object, what: &'static str, expected: &'static str) -> ExtractionFailure {
    ExtractionFailure::UnexpectedType {
        what,
        expected,
        found: object_kind(found),
    }
}

/// Short name of an object's type, for error messages
fn object_kind(obj: &Object) -> &'static str {
    match obj {
        Object::Null => "null",
        Object::Boolean(_) => "boolean",
        Object::Integer(_) => "integer",
        Object::Real(_) => "real",
        Object::Name(_) => "name",
        Object::String(..) => "string",
        Object::Array(_) => "array",
        Object::Dictionary(_) => "dictionary",
        Object::Stream(_) => "stream",
        Object::Reference(_) => "reference",
        #[allow(unreachable_patterns)]
        _ => "object",
    }
}
