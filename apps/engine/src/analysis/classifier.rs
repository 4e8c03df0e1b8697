//! Overlap / gap / under-evidence classification.
//!
//! Compares the keyword sets of a job description and a resume, citing every
//! finding with a span from the document it came from. Gap severity is a
//! strict priority cascade (HIGH, then MEDIUM, else LOW) driven by the JD
//! context window around the keyword's first occurrence.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::extractor::extract_keywords;
use crate::analysis::matcher;
use crate::analysis::span::{locate, ResumeSpan, TextSpan};

/// Confidence assigned to deterministic keyword overlaps.
pub const OVERLAP_CONFIDENCE: f64 = 0.9;

/// Radius (in characters) of the JD context window used for severity
/// assignment.
const CONTEXT_RADIUS: usize = 100;

/// JD occurrence count above which a gap is at least MEDIUM severity.
const MEDIUM_FREQUENCY_THRESHOLD: usize = 2;

/// Fixed reason attached to every under-evidenced finding.
pub const UNDER_EVIDENCE_REASON: &str =
    "Skill is claimed but no bullet backs it with a metric or an action-verb-led accomplishment";

/// HIGH-severity context: requirement language near the keyword.
/// "require" is a prefix match so "requires"/"required"/"requirements" all hit.
static HIGH_CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)require|must have|essential").expect("valid severity regex"));

/// MEDIUM-severity context: responsibility language near the keyword.
static MEDIUM_CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)responsibilities|your role|what you'll do").expect("valid severity regex")
});

/// Quantified-impact patterns: "40%", "3x", "$2M", "reduced ... 30".
static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*%|\d+x|\$\d+|\b(?:increased|reduced|improved)\b[^.\n]*?\d")
        .expect("valid metric regex")
});

/// Recognized action verbs, anchored at the start of a bullet.
static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:built|created|developed|designed|implemented|led)\b")
        .expect("valid action-verb regex")
});

/// Gap severity, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A skill present in both the job description and the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapItem {
    pub skill: String,
    pub jd_span: TextSpan,
    pub resume_span: ResumeSpan,
    pub confidence: f64,
}

/// A skill the job description requires but the resume never mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapItem {
    pub skill: String,
    pub jd_span: TextSpan,
    pub severity: Severity,
}

/// A skill the resume claims but never backs with a qualifying bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderEvidencedItem {
    pub skill: String,
    pub resume_span: ResumeSpan,
    pub reason: String,
}

/// Emits one `OverlapItem` per keyword present in both documents.
///
/// If a span cannot be located in either text (single-occurrence lookup can
/// miss, e.g. the synthetic duration keyword), the item is skipped rather
/// than emitted partially.
pub fn find_overlaps(jd_text: &str, resume_text: &str) -> Vec<OverlapItem> {
    let jd_keywords = extract_keywords(jd_text);
    let resume_keywords = extract_keywords(resume_text);

    jd_keywords
        .intersection(&resume_keywords)
        .filter_map(|skill| {
            let jd_span = locate(skill, jd_text)?;
            let resume_span = locate(skill, resume_text)?;
            Some(OverlapItem {
                skill: skill.clone(),
                jd_span,
                resume_span: ResumeSpan::unstructured(resume_span),
                confidence: OVERLAP_CONFIDENCE,
            })
        })
        .collect()
}

/// Emits one `GapItem` per JD keyword absent from the resume keyword set.
pub fn find_gaps(jd_text: &str, resume_text: &str) -> Vec<GapItem> {
    let jd_keywords = extract_keywords(jd_text);
    let resume_keywords = extract_keywords(resume_text);

    jd_keywords
        .difference(&resume_keywords)
        .filter_map(|skill| {
            let jd_span = locate(skill, jd_text)?;
            let severity = assign_severity(skill, jd_text, &jd_span);
            Some(GapItem {
                skill: skill.clone(),
                jd_span,
                severity,
            })
        })
        .collect()
}

/// Severity cascade: HIGH first, then MEDIUM, else LOW. The criteria are not
/// evaluated independently.
fn assign_severity(skill: &str, jd_text: &str, jd_span: &TextSpan) -> Severity {
    let window = context_window(jd_text, jd_span.start, jd_span.end);

    if HIGH_CONTEXT_RE.is_match(window) {
        return Severity::High;
    }
    if MEDIUM_CONTEXT_RE.is_match(window)
        || matcher::count(skill, jd_text) > MEDIUM_FREQUENCY_THRESHOLD
    {
        return Severity::Medium;
    }
    Severity::Low
}

/// Fixed-radius window of `text` centered on `[start, end)`. The radius is
/// counted in characters, not bytes, so non-ASCII text gets the full window.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let lo = text[..start]
        .char_indices()
        .rev()
        .take(CONTEXT_RADIUS)
        .last()
        .map_or(start, |(i, _)| i);
    let hi = text[end..]
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map_or(text.len(), |(i, _)| end + i);
    &text[lo..hi]
}

/// Emits one `UnderEvidencedItem` per resume keyword that no bullet backs.
///
/// A bullet backs a keyword when it contains the keyword as a whole word AND
/// either carries a metric or starts with a recognized action verb.
pub fn find_under_evidenced(resume_text: &str, bullets: &[String]) -> Vec<UnderEvidencedItem> {
    let resume_keywords = extract_keywords(resume_text);

    resume_keywords
        .iter()
        .filter(|skill| !bullets.iter().any(|b| bullet_backs_skill(skill, b)))
        .filter_map(|skill| {
            let span = locate(skill, resume_text)?;
            Some(UnderEvidencedItem {
                skill: skill.clone(),
                resume_span: ResumeSpan::unstructured(span),
                reason: UNDER_EVIDENCE_REASON.to_string(),
            })
        })
        .collect()
}

fn bullet_backs_skill(skill: &str, bullet: &str) -> bool {
    matcher::contains_word(skill, bullet)
        && (METRIC_RE.is_match(bullet) || ACTION_VERB_RE.is_match(bullet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const JD: &str = "Required: Python and PostgreSQL. Kubernetes is a plus. \
                      Responsibilities include Docker workflows.";
    const RESUME: &str = "Seasoned engineer: Python, Docker, and Terraform. \
                          Shipped services on AWS.";

    #[test]
    fn test_overlap_contains_shared_skills_only() {
        let overlaps = find_overlaps(JD, RESUME);
        let skills: BTreeSet<_> = overlaps.iter().map(|o| o.skill.as_str()).collect();
        assert_eq!(skills, BTreeSet::from(["Python", "Docker"]));
    }

    #[test]
    fn test_overlap_confidence_is_deterministic_constant() {
        for item in find_overlaps(JD, RESUME) {
            assert!((item.confidence - OVERLAP_CONFIDENCE).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_overlap_spans_cite_both_documents() {
        let overlaps = find_overlaps(JD, RESUME);
        let python = overlaps.iter().find(|o| o.skill == "Python").unwrap();
        assert_eq!(&JD[python.jd_span.start..python.jd_span.end], "Python");
        let rs = &python.resume_span.span;
        assert_eq!(&RESUME[rs.start..rs.end], "Python");
    }

    #[test]
    fn test_overlap_symmetry() {
        let forward: BTreeSet<_> = find_overlaps(JD, RESUME)
            .into_iter()
            .map(|o| o.skill)
            .collect();
        let backward: BTreeSet<_> = find_overlaps(RESUME, JD)
            .into_iter()
            .map(|o| o.skill)
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_gap_complement_invariant() {
        // Every JD keyword lands in exactly one of {overlaps, gaps}.
        let overlap_skills: BTreeSet<_> = find_overlaps(JD, RESUME)
            .into_iter()
            .map(|o| o.skill)
            .collect();
        let gap_skills: BTreeSet<_> =
            find_gaps(JD, RESUME).into_iter().map(|g| g.skill).collect();

        assert!(overlap_skills.is_disjoint(&gap_skills));
        let union: BTreeSet<_> = overlap_skills.union(&gap_skills).cloned().collect();
        assert_eq!(union, extract_keywords(JD));
    }

    #[test]
    fn test_severity_high_from_requirement_context() {
        let jd = "This role requires 5+ years Python. Python is used daily. \
                  Python, Python, Python.";
        let gaps = find_gaps(jd, "Frontend work in React only");
        let python = gaps.iter().find(|g| g.skill == "Python").unwrap();
        // Window around the first occurrence contains "requires" — HIGH wins
        // over the >2 frequency rule.
        assert_eq!(python.severity, Severity::High);
    }

    #[test]
    fn test_severity_medium_from_responsibility_context() {
        let jd = "What you'll do: ship Terraform modules across our fleet.";
        let gaps = find_gaps(jd, "No infra background");
        let terraform = gaps.iter().find(|g| g.skill == "Terraform").unwrap();
        assert_eq!(terraform.severity, Severity::Medium);
    }

    #[test]
    fn test_severity_medium_from_frequency() {
        // No context phrases, but the keyword occurs more than twice.
        let jd = "Kafka pipelines. Kafka topics. Kafka consumers everywhere.";
        let gaps = find_gaps(jd, "Batch jobs only");
        let kafka = gaps.iter().find(|g| g.skill == "Kafka").unwrap();
        assert_eq!(kafka.severity, Severity::Medium);
    }

    #[test]
    fn test_severity_low_when_no_signal() {
        let jd = "Some familiarity with Figma would be nice.";
        let gaps = find_gaps(jd, "Backend engineer");
        let figma = gaps.iter().find(|g| g.skill == "Figma").unwrap();
        assert_eq!(figma.severity, Severity::Low);
    }

    #[test]
    fn test_severity_cascade_is_strict_priority() {
        // Both HIGH context and >2 occurrences present — HIGH must win.
        let jd = "Redis is required. Redis caching, Redis queues, Redis locks.";
        let gaps = find_gaps(jd, "No caching experience");
        let redis = gaps.iter().find(|g| g.skill == "Redis").unwrap();
        assert_eq!(redis.severity, Severity::High);
    }

    #[test]
    fn test_gap_for_synthetic_duration_keyword_is_skipped_without_span() {
        // "7 years of experience" extracts as "7+ years", which never occurs
        // verbatim — the gap is silently omitted, not an error.
        let jd = "7 years of experience building services";
        let gaps = find_gaps(jd, "Junior engineer");
        assert!(gaps.iter().all(|g| g.skill != "7+ years"));
    }

    #[test]
    fn test_under_evidenced_end_to_end() {
        let resume = "Skills: Kubernetes, Python. \
                      Worked on various deployment tasks.";
        let bullets = vec![
            "Built Python services handling 2M requests/day".to_string(),
            "Worked on deployments".to_string(),
        ];
        let items = find_under_evidenced(resume, &bullets);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].skill, "Kubernetes");
        assert_eq!(items[0].reason, UNDER_EVIDENCE_REASON);
    }

    #[test]
    fn test_metric_bullet_backs_skill() {
        assert!(bullet_backs_skill(
            "Redis",
            "Cut p99 latency 40% by introducing Redis caching"
        ));
    }

    #[test]
    fn test_action_verb_bullet_backs_skill() {
        assert!(bullet_backs_skill(
            "Terraform",
            "Designed Terraform modules for multi-region deploys"
        ));
    }

    #[test]
    fn test_bullet_with_skill_but_no_evidence_does_not_back() {
        assert!(!bullet_backs_skill(
            "Kubernetes",
            "Some exposure to Kubernetes during onboarding"
        ));
    }

    #[test]
    fn test_bullet_with_evidence_but_no_skill_does_not_back() {
        assert!(!bullet_backs_skill(
            "Kubernetes",
            "Built CI pipelines reducing build time by 60%"
        ));
    }

    #[test]
    fn test_action_verb_must_anchor_at_bullet_start() {
        assert!(!bullet_backs_skill(
            "Kafka",
            "The team built Kafka consumers" // verb mid-bullet, no metric
        ));
    }

    #[test]
    fn test_increased_followed_by_digits_counts_as_metric() {
        assert!(bullet_backs_skill(
            "GraphQL",
            "Migrated to GraphQL and increased throughput to 900 rps"
        ));
    }

    #[test]
    fn test_empty_inputs_yield_empty_findings() {
        assert!(find_overlaps("", "").is_empty());
        assert!(find_gaps("", "").is_empty());
        assert!(find_under_evidenced("", &[]).is_empty());
    }

    #[test]
    fn test_context_window_is_char_boundary_safe() {
        // Keyword separated from the non-ASCII padding by spaces so it still
        // extracts as a whole word; the window edges land amid multi-byte
        // chars and must not split one.
        let text = format!("{} Kubernetes {}", "é".repeat(80), "é".repeat(80));
        let gaps = find_gaps(&text, "none");
        let k8s = gaps.iter().find(|g| g.skill == "Kubernetes").unwrap();
        assert_eq!(k8s.severity, Severity::Low);
    }

    #[test]
    fn test_context_window_radius_counts_chars_not_bytes() {
        // 85 two-byte chars separate "required" from the keyword: within a
        // 100-char radius, but past 100 bytes. The requirement phrase must
        // still be seen.
        let jd = format!("required {} Docker", "é".repeat(85));
        let gaps = find_gaps(&jd, "no containers here");
        let docker = gaps.iter().find(|g| g.skill == "Docker").unwrap();
        assert_eq!(docker.severity, Severity::High);
    }
}
