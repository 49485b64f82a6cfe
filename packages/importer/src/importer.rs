//! Import service that ties reading, parsing and writing together.

use std::path::Path;

use crate::document::{build_document, save_json, DocumentOverrides};
use crate::error::Result;
use crate::source::{read_source, DecodeMode};
use crate::types::{Document, DocumentFamily};

/// How each family's source files are decoded.
fn decode_mode(family: DocumentFamily) -> DecodeMode {
    match family {
        DocumentFamily::CoreRules => DecodeMode::Ignore,
        DocumentFamily::TournamentRules => DecodeMode::Replace,
    }
}

/// Parse a rulebook file into a document without writing it.
///
/// # Arguments
/// * `family` - Which rulebook the file contains
/// * `input` - Path to the plain-text rulebook
/// * `overrides` - Metadata supplied by the caller
pub fn parse_rulebook(
    family: DocumentFamily,
    input: &Path,
    overrides: &DocumentOverrides,
) -> Result<Document> {
    overrides.validate()?;
    let text = read_source(input, decode_mode(family))?;
    build_document(family, &text, overrides)
}

/// Convert a rulebook file into a JSON document on disk.
///
/// # Returns
/// The document that was written
pub fn import_rulebook(
    family: DocumentFamily,
    input: &Path,
    output: &Path,
    overrides: &DocumentOverrides,
) -> Result<Document> {
    let document = parse_rulebook(family, input, overrides)?;
    save_json(&document, output)?;

    tracing::info!(
        family = family.as_str(),
        entries = document.entries.len(),
        output = %output.display(),
        "Imported rulebook"
    );

    Ok(document)
}
