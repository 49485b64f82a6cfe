//! Core Rules parsing policy.
//!
//! Only root rules (`103`) carry a heading; a child rule's header sentence
//! is the first line of its body. Blank lines are kept as paragraph breaks.

use std::collections::HashMap;

use super::{LineClassifier, RulebookParser};
use crate::hierarchy::breadcrumb_pairs;
use crate::types::{DocumentEntry, DocumentFamily, RuleEntry};

/// Parser for the Riftbound Core Rules.
#[derive(Debug, Default)]
pub struct CoreRulesParser;

impl CoreRulesParser {
    /// Create a Core Rules parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Headings of root rules, keyed by reference. Later duplicates win.
    fn root_titles(rules: &[RuleEntry]) -> HashMap<String, String> {
        rules
            .iter()
            .filter(|rule| rule.is_root())
            .map(|rule| (rule.reference.clone(), rule.heading.trim().to_string()))
            .collect()
    }

    fn freeze(rule: &RuleEntry, doc_id: &str, titles: &HashMap<String, String>) -> DocumentEntry {
        let header = rule.heading.trim();

        let (heading, lines): (&str, Vec<&str>) = if rule.is_root() {
            (header, rule.body.iter().map(String::as_str).collect())
        } else if header.is_empty() {
            ("", rule.body.iter().map(String::as_str).collect())
        } else {
            let lines = std::iter::once(header)
                .chain(rule.body.iter().map(String::as_str))
                .collect();
            ("", lines)
        };

        DocumentEntry {
            key: DocumentFamily::CoreRules.entry_key(doc_id, &rule.reference),
            reference: rule.reference.clone(),
            heading: Some(heading.to_string()),
            path: breadcrumb_pairs(&rule.reference, titles),
            text: join_paragraph_lines(&lines),
        }
    }
}

impl RulebookParser for CoreRulesParser {
    fn family(&self) -> DocumentFamily {
        DocumentFamily::CoreRules
    }

    fn classifier(&self) -> LineClassifier {
        LineClassifier::core()
    }

    fn open_rule(&mut self, reference: &str, rest: &str) -> RuleEntry {
        RuleEntry::new(reference, rest)
    }

    fn body_line(&self, line: &str) -> Option<String> {
        Some(line.to_string())
    }

    fn entries(&self, rules: &[RuleEntry], doc_id: &str) -> Vec<DocumentEntry> {
        let titles = Self::root_titles(rules);
        rules
            .iter()
            .map(|rule| Self::freeze(rule, doc_id, &titles))
            .collect()
    }
}

/// Join lines with newlines, trimming line ends and the whole result.
fn join_paragraph_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::scan;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Riftbound Core Rules
Last Updated: 2025-10-01

000. Golden and Silver Rules
The Golden Rule: card text supersedes rules text.

The Silver Rule: card text uses specific terms.
103. To play Riftbound, you need a deck.
103.1. Champion Legend
103.1.b. Domain Identity
103.1.b.2. Your deck's Domain Identity is dictated by the domains of your Champion Legend.
It may contain cards of those domains only.
";

    fn parse(text: &str) -> Vec<DocumentEntry> {
        let mut parser = CoreRulesParser::new();
        let parsed = scan(&mut parser, text);
        parser.entries(&parsed.rules, "CR")
    }

    #[test]
    fn test_entries_in_source_order() {
        let refs: Vec<String> = parse(SAMPLE).into_iter().map(|e| e.reference).collect();
        assert_eq!(refs, vec!["000", "103", "103.1", "103.1.b", "103.1.b.2"]);
    }

    #[test]
    fn test_root_keeps_heading_and_paragraphs() {
        let entries = parse(SAMPLE);
        let root = &entries[0];
        assert_eq!(root.key, "CR-000");
        assert_eq!(root.heading.as_deref(), Some("Golden and Silver Rules"));
        assert_eq!(
            root.text,
            "The Golden Rule: card text supersedes rules text.\n\nThe Silver Rule: card text uses specific terms."
        );
        assert_eq!(root.path, vec!["000", "Golden and Silver Rules"]);
    }

    #[test]
    fn test_child_folds_header_into_text() {
        let entries = parse(SAMPLE);
        let child = entries
            .iter()
            .find(|e| e.reference == "103.1.b.2")
            .unwrap();
        assert_eq!(child.key, "CR-103.1.b.2");
        assert_eq!(child.heading.as_deref(), Some(""));
        assert_eq!(
            child.text,
            "Your deck's Domain Identity is dictated by the domains of your Champion Legend.\nIt may contain cards of those domains only."
        );
        assert_eq!(
            child.path,
            vec![
                "103",
                "To play Riftbound, you need a deck.",
                "103.1",
                "",
                "103.1.b",
                "",
                "103.1.b.2",
                "",
            ]
        );
    }

    #[test]
    fn test_root_without_body_has_empty_text() {
        let entries = parse("103. To play Riftbound, you need a deck.\n");
        assert_eq!(entries[0].text, "");
        assert_eq!(
            entries[0].heading.as_deref(),
            Some("To play Riftbound, you need a deck.")
        );
    }

    #[test]
    fn test_banners_never_become_content() {
        let entries = parse("100. Intro\nRiftbound Core Rules\nLast Updated: 2025-10-01\nbody\n");
        assert_eq!(entries[0].text, "body");
    }

    #[test]
    fn test_last_updated_detected() {
        let parsed = scan(&mut CoreRulesParser::new(), SAMPLE);
        assert!(parsed.title_found);
        assert_eq!(parsed.last_updated.as_deref(), Some("2025-10-01"));
    }

    #[test]
    fn test_fallback_header_is_parsed() {
        let entries = parse("103. Decks\n103.2 Main Deck of 40 cards\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].reference, "103.2");
        assert_eq!(entries[1].text, "Main Deck of 40 cards");
    }

    #[test]
    fn test_duplicate_root_last_title_wins() {
        let entries = parse("100. First\n100. Second\n100.1. Child\n");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].path, vec!["100", "Second", "100.1", ""]);
    }
}
