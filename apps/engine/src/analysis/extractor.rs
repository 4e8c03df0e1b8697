//! Keyword extraction — scans free text against the fixed vocabulary and
//! detects experience-duration phrases.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::{matcher, vocabulary};

/// Matches "<N>+ years [of] experience" phrases, e.g. "5 years of experience",
/// "10+ years experience".
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*\+?\s*years?\s+(?:of\s+)?experience").expect("valid duration regex")
});

/// Extracts the set of canonical keywords present in `text`.
///
/// Matching is case-insensitive and word-boundary anchored; matched terms are
/// reported with their canonical vocabulary spelling. A detected experience
/// duration adds a synthetic `"<N>+ years"` keyword. Unmatched text yields an
/// empty set — never an error.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();

    for term in vocabulary::all() {
        if matcher::contains_word(term, text) {
            keywords.insert(term.to_string());
        }
    }

    if let Some(caps) = DURATION_RE.captures(text) {
        let years = &caps[1];
        keywords.insert(format!("{years}+ years"));
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_canonical_spelling() {
        let set = extract_keywords("i used POSTGRESQL and postgresql");
        assert!(set.contains("PostgreSQL"));
        assert_eq!(
            set.iter().filter(|k| k.eq_ignore_ascii_case("postgresql")).count(),
            1
        );
    }

    #[test]
    fn test_idempotent() {
        let text = "Python, Docker, and REST APIs with 5 years of experience";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_word_boundary_rejects_embedded_terms() {
        let set = extract_keywords("a javascripter wrote this");
        assert!(!set.contains("JavaScript"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_unmatched_text_yields_empty_set() {
        assert!(extract_keywords("the quick brown fox").is_empty());
    }

    #[test]
    fn test_duration_phrase_adds_synthetic_keyword() {
        let set = extract_keywords("We need 5+ years of experience with Rust");
        assert!(set.contains("5+ years"));
        assert!(set.contains("Rust"));
    }

    #[test]
    fn test_duration_without_plus_or_of() {
        let set = extract_keywords("requires 10 years experience in backend work");
        assert!(set.contains("10+ years"));
    }

    #[test]
    fn test_bare_years_is_not_a_duration() {
        let set = extract_keywords("3 years at Initech");
        assert!(!set.iter().any(|k| k.ends_with("+ years")));
    }

    #[test]
    fn test_multiple_categories_extracted() {
        let set = extract_keywords(
            "Built React frontends over GraphQL, deployed on Kubernetes with CI/CD, data in MongoDB",
        );
        for expected in ["React", "GraphQL", "Kubernetes", "CI/CD", "MongoDB"] {
            assert!(set.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_set_is_deduplicated() {
        let set = extract_keywords("Docker docker DOCKER");
        assert_eq!(set.iter().filter(|k| *k == "Docker").count(), 1);
        assert_eq!(set.len(), 1);
    }
}
