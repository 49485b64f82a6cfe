//! Line classification for rulebook text.
//!
//! Every input line is either a rule header, one of the known banner lines
//! (document title, `Last Updated:`), or continuation text.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{CORE_RULES, TOURNAMENT_RULES};

/// Core Rules header: three-digit root, dot and whitespace, non-empty text.
///
/// Matches `000. Golden and Silver Rules` and `103.1.b.2. Your deck's ...`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CORE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<ref>[0-9]{3}(?:\.[0-9A-Za-z]+)*)\.\s+(?P<rest>.*\S)\s*$")
        .expect("valid regex")
});

/// Core Rules header without the dot after the reference (`103.1 Text`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CORE_HEADER_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<ref>[0-9]{3}(?:\.[0-9A-Za-z]+)*)\s+(?P<rest>.*\S)\s*$")
        .expect("valid regex")
});

/// Tournament Rules header: 1-3 digit root, dot, optional text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TOURNAMENT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?P<ref>[0-9]{1,3}(?:\.[0-9a-z]+)*)\.\s*(?P<rest>.*?)\s*$")
        .expect("valid regex")
});

/// `Last Updated: YYYY-MM-DD` banner.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAST_UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*Last Updated:\s*(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})\s*$")
        .expect("valid regex")
});

static CORE_TITLE: LazyLock<Regex> = LazyLock::new(|| title_pattern(CORE_RULES.title));

static TOURNAMENT_TITLE: LazyLock<Regex> =
    LazyLock::new(|| title_pattern(TOURNAMENT_RULES.title));

static CORE_HEADERS: [&LazyLock<Regex>; 2] = [&CORE_HEADER, &CORE_HEADER_FALLBACK];

static TOURNAMENT_HEADERS: [&LazyLock<Regex>; 1] = [&TOURNAMENT_HEADER];

/// Whole-line, case-insensitive match of a document title.
#[allow(clippy::expect_used)] // Escaped constant title, always a valid pattern
fn title_pattern(title: &str) -> Regex {
    Regex::new(&format!(r"(?i)^\s*{}\s*$", regex::escape(title))).expect("valid regex")
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A rule header with its reference and the text after it.
    Header { reference: &'a str, rest: &'a str },

    /// The document title banner.
    Title,

    /// A `Last Updated:` banner carrying its date.
    LastUpdated(&'a str),

    /// Anything else, including blank lines.
    Continuation,
}

/// Family-specific line classifier.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    headers: &'static [&'static LazyLock<Regex>],
    title: &'static LazyLock<Regex>,
}

impl LineClassifier {
    /// Classifier for the Core Rules.
    #[must_use]
    pub fn core() -> Self {
        Self {
            headers: &CORE_HEADERS,
            title: &CORE_TITLE,
        }
    }

    /// Classifier for the Tournament Rules.
    #[must_use]
    pub fn tournament() -> Self {
        Self {
            headers: &TOURNAMENT_HEADERS,
            title: &TOURNAMENT_TITLE,
        }
    }

    /// Classify one line.
    ///
    /// Header patterns are tried in order; the first match wins.
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if self.title.is_match(line) {
            return LineKind::Title;
        }

        if let Some(date) = LAST_UPDATED.captures(line).and_then(|c| c.name("date")) {
            return LineKind::LastUpdated(date.as_str());
        }

        for pattern in self.headers {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let (Some(reference), Some(rest)) = (caps.name("ref"), caps.name("rest")) else {
                continue;
            };
            return LineKind::Header {
                reference: reference.as_str().trim().trim_end_matches('.'),
                rest: rest.as_str().trim(),
            };
        }

        LineKind::Continuation
    }
}
