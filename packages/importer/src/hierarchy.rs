//! Breadcrumb paths for parsed rules.
//!
//! The Core Rules carry a full ancestor trail (`["103", "Deck Construction",
//! "103.1", "", ...]`), the Tournament Rules a single macro section label
//! (`["200 Definitions"]`).

use std::collections::HashMap;

use crate::config::DEFAULT_MACRO_TITLES;
use crate::reference::{ancestor_chain, root_number};

/// Build the alternating `[ref, title, ref, title, ...]` breadcrumb for a
/// reference, root first.
///
/// Ancestors missing from `titles` resolve to an empty title.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use riftbound_importer::hierarchy::breadcrumb_pairs;
///
/// let titles = HashMap::from([("103".to_string(), "Deck Construction".to_string())]);
/// assert_eq!(
///     breadcrumb_pairs("103.1", &titles),
///     vec!["103", "Deck Construction", "103.1", ""]
/// );
/// ```
#[must_use]
pub fn breadcrumb_pairs(reference: &str, titles: &HashMap<String, String>) -> Vec<String> {
    ancestor_chain(reference)
        .into_iter()
        .flat_map(|r| {
            let title = titles.get(r).cloned().unwrap_or_default();
            [r.to_string(), title]
        })
        .collect()
}

/// The hundreds bucket of a reference, zero-padded to three digits.
///
/// # Examples
/// ```
/// use riftbound_importer::hierarchy::macro_bucket;
///
/// assert_eq!(macro_bucket("204.4.a"), "200");
/// assert_eq!(macro_bucket("7"), "000");
/// ```
#[must_use]
pub fn macro_bucket(reference: &str) -> String {
    format!("{:03}", (root_number(reference) / 100) * 100)
}

/// Whether a reference names a bucket boundary (`100`, `200`, ...).
#[must_use]
pub fn is_bucket_root(reference: &str) -> bool {
    crate::reference::is_root(reference) && reference.ends_with("00")
}

/// Macro section titles for the Tournament Rules.
///
/// Starts from [`DEFAULT_MACRO_TITLES`]; root rules that name a bucket
/// replace its title for every rule opened afterwards.
#[derive(Debug, Clone)]
pub struct MacroTitles {
    titles: HashMap<String, String>,
}

impl Default for MacroTitles {
    fn default() -> Self {
        let titles = DEFAULT_MACRO_TITLES
            .iter()
            .map(|(bucket, title)| ((*bucket).to_string(), (*title).to_string()))
            .collect();
        Self { titles }
    }
}

impl MacroTitles {
    /// Create a table holding the default bucket titles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title of a bucket, `Section <bucket>` when unknown.
    #[must_use]
    pub fn title(&self, bucket: &str) -> String {
        self.titles
            .get(bucket)
            .cloned()
            .unwrap_or_else(|| format!("Section {bucket}"))
    }

    /// Replace the title of a bucket.
    pub fn set_title(&mut self, bucket: impl Into<String>, title: impl Into<String>) {
        let bucket = bucket.into();
        let title = title.into();
        tracing::debug!(bucket = %bucket, title = %title, "Macro section title overridden");
        self.titles.insert(bucket, title);
    }

    /// Path label for a bucket, e.g. `"200 Definitions"`.
    #[must_use]
    pub fn label(&self, bucket: &str) -> String {
        format!("{bucket} {}", self.title(bucket)).trim().to_string()
    }
}
