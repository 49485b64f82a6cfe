//! Core data types for the importer.
//!
//! [`RuleEntry`] is the mutable rule built while scanning a rulebook;
//! [`Document`] and [`DocumentEntry`] are the frozen, serialisable output
//! consumed by the rules viewer.

use serde::{Deserialize, Serialize};

use crate::config::{FamilyProfile, CORE_RULES, TOURNAMENT_RULES};

/// The two rulebook families the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFamily {
    /// Riftbound Core Rules (`CR`).
    CoreRules,

    /// Riftbound Tournament Rules (`TR`).
    TournamentRules,
}

impl DocumentFamily {
    /// Default metadata for this family.
    #[must_use]
    pub fn profile(&self) -> &'static FamilyProfile {
        match self {
            Self::CoreRules => &CORE_RULES,
            Self::TournamentRules => &TOURNAMENT_RULES,
        }
    }

    /// Short name used in log output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoreRules => "core",
            Self::TournamentRules => "tournament",
        }
    }

    /// Build the stable entry key for a reference.
    ///
    /// # Examples
    /// ```
    /// use riftbound_importer::types::DocumentFamily;
    ///
    /// assert_eq!(DocumentFamily::CoreRules.entry_key("CR", "103.1"), "CR-103.1");
    /// assert_eq!(DocumentFamily::TournamentRules.entry_key("TR", "204"), "TR 204");
    /// ```
    #[must_use]
    pub fn entry_key(&self, doc_id: &str, reference: &str) -> String {
        match self {
            Self::CoreRules => format!("{doc_id}-{reference}"),
            Self::TournamentRules => format!("{doc_id} {reference}"),
        }
    }
}

/// A rule while it is being accumulated.
///
/// Created when a header line matches, extended by continuation lines and
/// frozen once the next header (or the end of input) is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Dotted reference, e.g. `103.1.b.2`.
    pub reference: String,

    /// Heading text taken from the header line (may be empty).
    pub heading: String,

    /// Body lines in source order.
    pub body: Vec<String>,

    /// Macro section label (`"200 Definitions"`), Tournament Rules only.
    pub section: Option<String>,
}

impl RuleEntry {
    /// Create a new rule with an empty body.
    #[must_use]
    pub fn new(reference: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            heading: heading.into(),
            body: Vec::new(),
            section: None,
        }
    }

    /// Attach a macro section label.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Append a body line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    /// Whether this is a root rule (no dot in the reference).
    #[must_use]
    pub fn is_root(&self) -> bool {
        crate::reference::is_root(&self.reference)
    }
}

/// A frozen rule as written to the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// `<doc_id>-<ref>` (Core) or `<doc_id> <ref>` (Tournament).
    pub key: String,

    /// Dotted rule reference.
    #[serde(rename = "ref")]
    pub reference: String,

    /// Section heading; `None` serialises as `null`.
    pub heading: Option<String>,

    /// Breadcrumb path, shape depends on the document family.
    pub path: Vec<String>,

    /// Rule body text.
    pub text: String,
}

/// A complete rulebook document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub title: String,
    pub lang: String,
    pub version_label: String,
    pub published_date: String,
    pub source_name: String,
    pub source_url: String,
    pub entries: Vec<DocumentEntry>,
}

impl Document {
    /// Reference of the first entry, if any.
    #[must_use]
    pub fn first_reference(&self) -> Option<&str> {
        self.entries.first().map(|e| e.reference.as_str())
    }

    /// Reference of the last entry, if any.
    #[must_use]
    pub fn last_reference(&self) -> Option<&str> {
        self.entries.last().map(|e| e.reference.as_str())
    }
}
