//! Tournament Rules parsing policy.
//!
//! Root rules (`204`) carry a heading, optionally split as `Title: body`.
//! Child rules (`204.4.a`) never do. Every rule is filed under its macro
//! section (`200 Definitions`) and the output is sorted by reference.

use super::{normalize_space, LineClassifier, RulebookParser};
use crate::hierarchy::{is_bucket_root, macro_bucket, MacroTitles};
use crate::reference::{compare_refs, is_root};
use crate::types::{DocumentEntry, DocumentFamily, RuleEntry};

/// Split a root header remainder into `(heading, body)` at the first colon.
///
/// Without a colon the whole remainder is the heading. When nothing precedes
/// the colon the whole remainder is kept as the heading.
///
/// # Examples
/// ```
/// use riftbound_importer::parser::split_title_body;
///
/// assert_eq!(
///     split_title_body("Decklists: Players must  register."),
///     ("Decklists".to_string(), "Players must register.".to_string())
/// );
/// assert_eq!(split_title_body("Definitions"), ("Definitions".to_string(), String::new()));
/// ```
#[must_use]
pub fn split_title_body(rest: &str) -> (String, String) {
    match rest.split_once(':') {
        Some((heading, body)) => {
            let heading = normalize_space(heading);
            let heading = if heading.is_empty() {
                normalize_space(rest)
            } else {
                heading
            };
            (heading, normalize_space(body))
        }
        None => (normalize_space(rest), String::new()),
    }
}

/// Parser for the Riftbound Tournament Rules.
#[derive(Debug, Default)]
pub struct TournamentRulesParser {
    macro_titles: MacroTitles,
}

impl TournamentRulesParser {
    /// Create a Tournament Rules parser with the default section titles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn freeze(rule: &RuleEntry, doc_id: &str) -> DocumentEntry {
        let heading = Some(rule.heading.clone()).filter(|h| !h.is_empty());

        DocumentEntry {
            key: DocumentFamily::TournamentRules.entry_key(doc_id, &rule.reference),
            reference: rule.reference.clone(),
            heading,
            path: vec![rule.section.clone().unwrap_or_default()],
            text: normalize_space(&rule.body.join(" ")),
        }
    }
}

impl RulebookParser for TournamentRulesParser {
    fn family(&self) -> DocumentFamily {
        DocumentFamily::TournamentRules
    }

    fn classifier(&self) -> LineClassifier {
        LineClassifier::tournament()
    }

    fn open_rule(&mut self, reference: &str, rest: &str) -> RuleEntry {
        let bucket = macro_bucket(reference);

        let (heading, first_line) = if is_root(reference) {
            let (heading, body) = split_title_body(rest);
            if is_bucket_root(reference) && !heading.is_empty() {
                self.macro_titles.set_title(bucket.as_str(), heading.as_str());
            }
            (heading, body)
        } else {
            (String::new(), rest.to_string())
        };

        let mut rule =
            RuleEntry::new(reference, heading).with_section(self.macro_titles.label(&bucket));
        if !first_line.is_empty() {
            rule.push_line(first_line);
        }
        rule
    }

    fn body_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        (!line.is_empty()).then(|| line.to_string())
    }

    fn entries(&self, rules: &[RuleEntry], doc_id: &str) -> Vec<DocumentEntry> {
        let mut entries: Vec<DocumentEntry> =
            rules.iter().map(|rule| Self::freeze(rule, doc_id)).collect();
        entries.sort_by(|a, b| compare_refs(&a.reference, &b.reference));
        entries
    }
}
