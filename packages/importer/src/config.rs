//! Configuration constants and validation functions for the importer.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ImporterError, Result};

/// Number of leading lines scanned for a `Last Updated:` banner.
pub const HEADER_SCAN_LINES: usize = 80;

/// Default document language.
pub const DEFAULT_LANG: &str = "en";

/// Default macro bucket titles for the Tournament Rules.
///
/// A root rule such as `200. Definitions` replaces the matching entry while
/// parsing.
pub const DEFAULT_MACRO_TITLES: [(&str, &str); 7] = [
    ("100", "Introduction"),
    ("200", "Definitions"),
    ("300", "Eligibility"),
    ("400", "Policies"),
    ("500", "Communication"),
    ("600", "Competition Formats"),
    ("700", "Enforcement and Penalties"),
];

/// Per-family defaults used when the CLI does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyProfile {
    /// Document identifier, also the prefix of every entry key.
    pub doc_id: &'static str,

    /// Document title, also the banner line consumed by the classifier.
    pub title: &'static str,

    /// Source attribution written when none is given.
    pub source_name: &'static str,

    /// Prefix of the generated version label when no date was detected.
    pub import_label_prefix: &'static str,
}

/// Defaults for the Core Rules.
pub const CORE_RULES: FamilyProfile = FamilyProfile {
    doc_id: "CR",
    title: "Riftbound Core Rules",
    source_name: "Official (imported from text file)",
    import_label_prefix: "import",
};

/// Defaults for the Tournament Rules.
pub const TOURNAMENT_RULES: FamilyProfile = FamilyProfile {
    doc_id: "TR",
    title: "Riftbound Tournament Rules",
    source_name: "User-provided official extract",
    import_label_prefix: "draft-import",
};

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate date format (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use riftbound_importer::config::validate_date;
///
/// assert!(validate_date("2025-12-31").is_ok());
/// assert!(validate_date("31-12-2025").is_err());
/// assert!(validate_date("2025-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(ImporterError::InvalidDate(date_str.to_string()));
    }

    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ImporterError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_valid() {
        assert!(validate_date("2025-01-01").is_ok());
        assert!(validate_date("2024-02-29").is_ok());
        // Publication dates may lie ahead of the import
        assert!(validate_date("2099-06-15").is_ok());
    }

    #[test]
    fn test_validate_date_invalid_format() {
        assert!(validate_date("").is_err());
        assert!(validate_date("2025/01/01").is_err());
        assert!(validate_date("2025-1-1").is_err());
        assert!(validate_date(" 2025-01-01").is_err());
    }

    #[test]
    fn test_validate_date_invalid_date() {
        assert!(validate_date("2025-13-01").is_err());
        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("2025-00-01").is_err());
    }

    #[test]
    fn test_today_is_valid_date() {
        assert!(validate_date(&today()).is_ok());
    }

    #[test]
    fn test_default_macro_titles_are_hundreds() {
        for (bucket, title) in DEFAULT_MACRO_TITLES {
            assert_eq!(bucket.len(), 3);
            assert!(bucket.ends_with("00"));
            assert!(!title.is_empty());
        }
    }
}
