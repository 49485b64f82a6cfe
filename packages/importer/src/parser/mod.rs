//! Rulebook text parsers.
//!
//! Both families share one scan loop ([`scan`]): classify each line, open a
//! rule on every header, append continuation text to the open rule, flush at
//! the end. The family-specific parts (header syntax, heading policy, body
//! handling, breadcrumb shape) live behind [`RulebookParser`].

mod accumulator;
mod classifier;
mod core_rules;
mod tournament;

pub use accumulator::RuleAccumulator;
pub use classifier::{LineClassifier, LineKind};
pub use core_rules::CoreRulesParser;
pub use tournament::{split_title_body, TournamentRulesParser};

use crate::config::HEADER_SCAN_LINES;
use crate::types::{DocumentEntry, DocumentFamily, RuleEntry};

/// Result of scanning a rulebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRulebook {
    /// Date from a `Last Updated:` banner near the top of the file.
    pub last_updated: Option<String>,

    /// Whether the family's title banner was seen.
    pub title_found: bool,

    /// Completed rules in source order.
    pub rules: Vec<RuleEntry>,
}

/// Family-specific parsing policy.
///
/// Implementations may keep state across the lines of one scan (the
/// Tournament Rules track macro section titles), so a parser instance is
/// meant for a single document.
pub trait RulebookParser {
    /// The document family this parser reads.
    fn family(&self) -> DocumentFamily;

    /// Line classifier with this family's header syntax.
    fn classifier(&self) -> LineClassifier;

    /// Build the rule opened by a header line.
    fn open_rule(&mut self, reference: &str, rest: &str) -> RuleEntry;

    /// Body line kept for a continuation line, `None` to drop it.
    fn body_line(&self, line: &str) -> Option<String>;

    /// Freeze completed rules into document entries.
    fn entries(&self, rules: &[RuleEntry], doc_id: &str) -> Vec<DocumentEntry>;
}

/// Create the parser for a document family.
#[must_use]
pub fn parser_for(family: DocumentFamily) -> Box<dyn RulebookParser> {
    match family {
        DocumentFamily::CoreRules => Box::new(CoreRulesParser::new()),
        DocumentFamily::TournamentRules => Box::new(TournamentRulesParser::new()),
    }
}

/// Scan rulebook text into completed rules.
pub fn scan<P: RulebookParser + ?Sized>(parser: &mut P, text: &str) -> ParsedRulebook {
    let classifier = parser.classifier();
    let mut accumulator = RuleAccumulator::new();
    let mut parsed = ParsedRulebook::default();
    let mut discarded = 0usize;

    for (index, line) in text.lines().enumerate() {
        match classifier.classify(line) {
            LineKind::Title => parsed.title_found = true,
            LineKind::LastUpdated(date) => {
                if index < HEADER_SCAN_LINES {
                    parsed.last_updated = Some(date.to_string());
                }
            }
            LineKind::Header { reference, rest } => {
                accumulator.open(parser.open_rule(reference, rest));
            }
            LineKind::Continuation => {
                let Some(body) = parser.body_line(line) else {
                    continue;
                };
                if !accumulator.append(body) {
                    discarded += 1;
                }
            }
        }
    }

    parsed.rules = accumulator.finish();

    if discarded > 0 {
        tracing::debug!(lines = discarded, "Discarded text before the first rule");
    }
    tracing::debug!(
        family = parser.family().as_str(),
        rules = parsed.rules.len(),
        title_found = parsed.title_found,
        last_updated = ?parsed.last_updated,
        "Scanned rulebook"
    );

    parsed
}

/// Collapse runs of whitespace into single spaces and trim.
pub(crate) fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_space() {
        assert_eq!(normalize_space("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize_space("   "), "");
    }

    #[test]
    fn test_scan_counts_headers() {
        let text = "preamble\n100. Introduction\nbody\n\nmore\n101. Scope\n101.1. One\n";
        for family in [DocumentFamily::CoreRules, DocumentFamily::TournamentRules] {
            let mut parser = parser_for(family);
            let parsed = scan(parser.as_mut(), text);
            assert_eq!(parsed.rules.len(), 3, "family {}", family.as_str());
        }
    }

    #[test]
    fn test_scan_last_updated_only_near_top() {
        let mut text = String::from("Last Updated: 2025-01-01\n100. Intro\n");
        for _ in 0..HEADER_SCAN_LINES {
            text.push_str("filler\n");
        }
        text.push_str("Last Updated: 2026-01-01\n");

        let parsed = scan(&mut CoreRulesParser::new(), &text);
        assert_eq!(parsed.last_updated.as_deref(), Some("2025-01-01"));
        // The late banner is still consumed, not appended to the rule
        assert!(parsed.rules[0].body.iter().all(|l| !l.contains("Last Updated")));
    }

    #[test]
    fn test_scan_title_banner() {
        let parsed = scan(
            &mut TournamentRulesParser::new(),
            "Riftbound Tournament Rules\n100. Introduction\n",
        );
        assert!(parsed.title_found);
        assert_eq!(parsed.rules.len(), 1);
        assert!(parsed.rules[0].body.is_empty());
    }
}
