//! Text spans — verbatim citations of where a keyword occurs in a document.

use serde::{Deserialize, Serialize};

use crate::analysis::matcher;

/// Section name used when resume structure is unknown at the engine boundary.
pub const DEFAULT_RESUME_SECTION: &str = "resume";

/// A verbatim substring of a source document and its byte offsets.
///
/// Invariant: `end - start == text.len()` and `text` is the case-preserving
/// slice of the source at `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A span inside the resume, tagged with the structural part it was found in.
/// Defaults (`"resume"`, index 0) apply when structure is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSpan {
    #[serde(flatten)]
    pub span: TextSpan,
    pub section: String,
    pub index: usize,
}

impl ResumeSpan {
    /// Wraps a span found in flat resume text with default structure.
    pub fn unstructured(span: TextSpan) -> Self {
        Self {
            span,
            section: DEFAULT_RESUME_SECTION.to_string(),
            index: 0,
        }
    }
}

/// Locates the first case-insensitive whole-word occurrence of `keyword` in
/// `text`. The keyword is treated as literal text.
///
/// Returns `None` when the keyword does not occur verbatim — expected for the
/// synthetic `"<N>+ years"` keyword, whose formatting rarely matches the
/// source phrase. Absence means "no citation available", not an error.
pub fn locate(keyword: &str, text: &str) -> Option<TextSpan> {
    let (start, end) = matcher::find_first(keyword, text)?;
    Some(TextSpan {
        text: text[start..end].to_string(),
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_preserves_source_casing() {
        let span = locate("PostgreSQL", "we love postgresql here").unwrap();
        assert_eq!(span.text, "postgresql");
        assert_eq!((span.start, span.end), (8, 18));
    }

    #[test]
    fn test_span_invariant_holds() {
        let text = "Deployed on Kubernetes clusters";
        let span = locate("Kubernetes", text).unwrap();
        assert_eq!(span.end - span.start, span.text.len());
        assert_eq!(&text[span.start..span.end], span.text);
    }

    #[test]
    fn test_locate_first_occurrence_only() {
        let span = locate("Rust", "Rust first, Rust second").unwrap();
        assert_eq!(span.start, 0);
    }

    #[test]
    fn test_locate_missing_keyword_is_none() {
        assert!(locate("Haskell", "Python and Go only").is_none());
    }

    #[test]
    fn test_synthetic_duration_keyword_may_not_locate() {
        // The source says "5 years of experience" but the canonical keyword
        // is "5+ years" — no verbatim occurrence, so no citation.
        assert!(locate("5+ years", "5 years of experience required").is_none());
    }

    #[test]
    fn test_locate_literal_not_pattern() {
        // Regex metacharacters in the keyword must not be interpreted.
        let span = locate("C++", "Senior C++ Engineer").unwrap();
        assert_eq!(span.text, "C++");
    }

    #[test]
    fn test_unstructured_resume_span_defaults() {
        let span = locate("Docker", "Docker experience").unwrap();
        let rspan = ResumeSpan::unstructured(span);
        assert_eq!(rspan.section, DEFAULT_RESUME_SECTION);
        assert_eq!(rspan.index, 0);
    }
}
