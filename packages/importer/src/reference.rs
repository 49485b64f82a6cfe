//! Helpers for dotted rule references such as `103.1.b.2`.

use std::cmp::Ordering;

/// Whether a reference is a root reference (no dot segments).
#[must_use]
pub fn is_root(reference: &str) -> bool {
    !reference.contains('.')
}

/// The parent of a reference, or `None` for a root reference.
///
/// # Examples
/// ```
/// use riftbound_importer::reference::parent_ref;
///
/// assert_eq!(parent_ref("103.1.b.2"), Some("103.1.b"));
/// assert_eq!(parent_ref("103"), None);
/// ```
#[must_use]
pub fn parent_ref(reference: &str) -> Option<&str> {
    reference.rsplit_once('.').map(|(parent, _)| parent)
}

/// The ancestor chain of a reference from root to the reference itself.
///
/// `"103.1.b"` yields `["103", "103.1", "103.1.b"]`.
#[must_use]
pub fn ancestor_chain(reference: &str) -> Vec<&str> {
    let mut chain = vec![reference];
    let mut current = reference;
    while let Some(parent) = parent_ref(current) {
        chain.push(parent);
        current = parent;
    }
    chain.reverse();
    chain
}

/// The integer value of the leading digit group.
///
/// Returns 0 when the leading group is not numeric; classified references
/// always start with digits.
#[must_use]
pub fn root_number(reference: &str) -> u32 {
    reference
        .split('.')
        .next()
        .and_then(|root| root.trim().parse().ok())
        .unwrap_or_default()
}

/// One segment of a reference sort key.
///
/// Variant order matters: numeric segments sort before alphabetic ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RefSegment {
    Number(u64),
    Word(String),
}

impl RefSegment {
    fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Self::Number(segment.parse().unwrap_or(u64::MAX))
        } else {
            Self::Word(segment.to_lowercase())
        }
    }
}

/// Hierarchy-aware sort key for a reference.
#[must_use]
pub fn sort_key(reference: &str) -> Vec<RefSegment> {
    reference.split('.').map(RefSegment::parse).collect()
}

/// Compare two references segment by segment.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use riftbound_importer::reference::compare_refs;
///
/// assert_eq!(compare_refs("9.a", "10"), Ordering::Less);
/// assert_eq!(compare_refs("9", "9.a"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_refs(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}
