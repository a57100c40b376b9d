// crates/rwloc-core/src/text.rs
//! Text normalization used by name lookups, filters and search.
//!
//! Matching is lowercase + trim, then plain equality or literal substring
//! containment. No pattern syntax is interpreted, so terms like `"a.*b"` or
//! `"(x"` are matched character for character.

/// Normalize a string for comparison (lowercase, trim whitespace).
///
/// # Examples
///
/// ```rust
/// use rwloc_core::text::normalize;
///
/// assert_eq!(normalize("  Kigali "), "kigali");
/// ```
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Compares two strings for equality after [`normalize`] on both sides.
///
/// ```rust
/// use rwloc_core::text::matches_normalized;
///
/// assert!(matches_normalized("KIGALI", " kigali"));
/// assert!(!matches_normalized("KIGALI", "SOUTH"));
/// ```
pub fn matches_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Literal substring test used by search.
///
/// When `case_sensitive` is false both sides are lowercased first. The term is
/// never trimmed here; an empty term is contained in every string.
pub fn contains_term(haystack: &str, term: &str, case_sensitive: bool) -> bool {
    SearchTerm::new(term, case_sensitive).found_in(haystack)
}

/// A search term folded once up front, for scans over many names.
///
/// ```rust
/// use rwloc_core::text::SearchTerm;
///
/// let term = SearchTerm::new("GIHANGA", false);
/// assert!(term.found_in("Gihanga"));
/// assert!(!SearchTerm::new("GIHANGA", true).found_in("Gihanga"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm {
    folded: String,
    case_sensitive: bool,
}

impl SearchTerm {
    pub fn new(term: &str, case_sensitive: bool) -> Self {
        let folded = if case_sensitive {
            term.to_string()
        } else {
            term.to_lowercase()
        };
        SearchTerm {
            folded,
            case_sensitive,
        }
    }

    /// The term as compared against names: lowercased unless case-sensitive.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        if self.case_sensitive {
            haystack.contains(self.folded.as_str())
        } else {
            haystack.to_lowercase().contains(self.folded.as_str())
        }
    }
}
