//! Accumulate-and-flush state for rules being scanned.

use crate::types::RuleEntry;

/// Holds the currently open rule and the rules completed so far.
///
/// Opening a rule flushes the previous one, so every header line produces
/// exactly one completed rule.
#[derive(Debug, Default)]
pub struct RuleAccumulator {
    current: Option<RuleEntry>,
    completed: Vec<RuleEntry>,
}

impl RuleAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a rule is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Flush the open rule (if any) and open `rule`.
    pub fn open(&mut self, rule: RuleEntry) {
        self.flush();
        tracing::trace!(reference = %rule.reference, "Opened rule");
        self.current = Some(rule);
    }

    /// Append a continuation line to the open rule.
    ///
    /// Returns `false` when no rule is open and the line was discarded.
    pub fn append(&mut self, line: impl Into<String>) -> bool {
        match self.current.as_mut() {
            Some(rule) => {
                rule.push_line(line);
                true
            }
            None => false,
        }
    }

    /// Flush the last open rule and return every completed rule in order.
    #[must_use]
    pub fn finish(mut self) -> Vec<RuleEntry> {
        self.flush();
        self.completed
    }

    fn flush(&mut self) {
        if let Some(rule) = self.current.take() {
            self.completed.push(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_discards_lines_before_first_rule() {
        let mut acc = RuleAccumulator::new();
        assert!(!acc.is_open());
        assert!(!acc.append("leading junk"));
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn test_open_flushes_previous_rule() {
        let mut acc = RuleAccumulator::new();
        acc.open(RuleEntry::new("100", "Introduction"));
        assert!(acc.append("first body line"));
        acc.open(RuleEntry::new("100.1", ""));
        assert!(acc.is_open());

        let rules = acc.finish();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].body, vec!["first body line"]);
        assert!(rules[1].body.is_empty());
    }

    #[test]
    fn test_one_rule_per_header_regardless_of_body() {
        let mut acc = RuleAccumulator::new();
        for (i, lines) in [0usize, 3, 1, 7].iter().enumerate() {
            acc.open(RuleEntry::new(format!("10{i}"), "Heading"));
            for n in 0..*lines {
                acc.append(format!("line {n}"));
            }
        }

        let rules = acc.finish();
        let refs: Vec<&str> = rules.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, vec!["100", "101", "102", "103"]);
        assert_eq!(rules[3].body.len(), 7);
    }
}
