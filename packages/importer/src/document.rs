//! Document assembly and JSON output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::{today, validate_date, DEFAULT_LANG};
use crate::error::{ImporterError, Result};
use crate::parser::{parser_for, scan, ParsedRulebook};
use crate::types::{Document, DocumentFamily};

/// Metadata overrides supplied on the command line.
///
/// Blank strings count as absent, so an empty `--title ""` falls back to the
/// detected or default title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOverrides {
    pub doc_id: Option<String>,
    pub title: Option<String>,
    pub lang: Option<String>,
    pub version_label: Option<String>,
    pub published_date: Option<String>,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
}

impl DocumentOverrides {
    /// Check overrides that must follow a fixed format.
    pub fn validate(&self) -> Result<()> {
        if let Some(date) = non_blank(self.published_date.as_deref()) {
            validate_date(date)?;
        }
        Ok(())
    }
}

/// Trimmed value, or `None` when missing or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Document-level metadata after applying overrides and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub doc_id: String,
    pub title: String,
    pub lang: String,
    pub version_label: String,
    pub published_date: String,
    pub source_name: String,
    pub source_url: String,
}

/// Resolve document metadata.
///
/// Precedence: override, then what was detected in the file, then the
/// family default. `today` is the date used for generated labels.
#[must_use]
pub fn resolve_metadata(
    family: DocumentFamily,
    last_updated: Option<&str>,
    overrides: &DocumentOverrides,
    today: &str,
) -> ResolvedMetadata {
    let profile = family.profile();
    let last_updated = non_blank(last_updated);

    let version_label = match (non_blank(overrides.version_label.as_deref()), last_updated) {
        (Some(label), _) => label.to_string(),
        (None, Some(date)) => format!("Last Updated: {date}"),
        (None, None) => format!("{}-{today}", profile.import_label_prefix),
    };

    let published_date = non_blank(overrides.published_date.as_deref())
        .or(last_updated)
        .unwrap_or(today)
        .to_string();

    ResolvedMetadata {
        doc_id: non_blank(overrides.doc_id.as_deref())
            .unwrap_or(profile.doc_id)
            .to_string(),
        title: non_blank(overrides.title.as_deref())
            .unwrap_or(profile.title)
            .to_string(),
        lang: non_blank(overrides.lang.as_deref())
            .unwrap_or(DEFAULT_LANG)
            .to_string(),
        version_label,
        published_date,
        source_name: non_blank(overrides.source_name.as_deref())
            .unwrap_or(profile.source_name)
            .to_string(),
        source_url: overrides
            .source_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Parse rulebook text and assemble the document.
///
/// # Arguments
/// * `family` - Which rulebook the text is
/// * `text` - Decoded rulebook text
/// * `overrides` - Metadata supplied by the caller
pub fn build_document(
    family: DocumentFamily,
    text: &str,
    overrides: &DocumentOverrides,
) -> Result<Document> {
    overrides.validate()?;

    let mut parser = parser_for(family);
    let parsed: ParsedRulebook = scan(parser.as_mut(), text);
    let metadata = resolve_metadata(family, parsed.last_updated.as_deref(), overrides, &today());
    let entries = parser.entries(&parsed.rules, &metadata.doc_id);

    Ok(Document {
        doc_id: metadata.doc_id,
        title: metadata.title,
        lang: metadata.lang,
        version_label: metadata.version_label,
        published_date: metadata.published_date,
        source_name: metadata.source_name,
        source_url: metadata.source_url,
        entries,
    })
}

/// Serialize a document as pretty-printed JSON with a trailing newline.
pub fn generate_json(document: &Document) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Save a document as JSON.
///
/// Creates missing parent directories and writes through a temporary file
/// that is synced and renamed, so an interrupted run never leaves a
/// truncated document behind.
pub fn save_json(document: &Document, output: &Path) -> Result<()> {
    let content = generate_json(document)?;

    let write_err = |source: std::io::Error| ImporterError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.json".to_string());
    let temp_file = output.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output.exists() {
        fs::remove_file(output).map_err(write_err)?;
    }

    fs::rename(&temp_file, output).map_err(write_err)?;
    tracing::debug!(path = %output.display(), bytes = content.len(), "Saved document");

    Ok(())
}
