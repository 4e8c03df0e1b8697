//! Deterministic analysis pass — runs the full pipeline over one JD/resume
//! pair and bundles every finding into a single report.
//!
//! Flow: extract → classify (overlaps, gaps, under-evidence) → score →
//! escalation flag. Synchronous, pure, no I/O.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::classifier::{
    find_gaps, find_overlaps, find_under_evidenced, GapItem, OverlapItem, UnderEvidencedItem,
};
use crate::analysis::fit::{calculate_fit, needs_escalation, FitResult};

/// Everything one deterministic pass produces. Value object — recomputed
/// fresh on every invocation, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitAnalysis {
    pub overlaps: Vec<OverlapItem>,
    pub gaps: Vec<GapItem>,
    pub under_evidenced: Vec<UnderEvidencedItem>,
    pub fit: FitResult,
    pub needs_escalation: bool,
}

/// Runs the deterministic pipeline: keyword extraction, overlap/gap/
/// under-evidence classification, fit scoring, escalation decision.
pub fn analyze(jd_text: &str, resume_text: &str, resume_bullets: &[String]) -> FitAnalysis {
    let overlaps = find_overlaps(jd_text, resume_text);
    let gaps = find_gaps(jd_text, resume_text);
    let under_evidenced = find_under_evidenced(resume_text, resume_bullets);

    let fit = calculate_fit(&overlaps, &gaps);
    let escalate = needs_escalation(&overlaps, &gaps);

    debug!(
        overlaps = overlaps.len(),
        gaps = gaps.len(),
        under_evidenced = under_evidenced.len(),
        level = ?fit.level,
        confidence = fit.confidence,
        escalate,
        "deterministic pass complete"
    );

    FitAnalysis {
        overlaps,
        gaps,
        under_evidenced,
        fit,
        needs_escalation: escalate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fit::FitLevel;

    const JD: &str = "Required: Python, PostgreSQL, Docker, Kubernetes, AWS, and Terraform \
                      for our platform team.";

    #[test]
    fn test_analyze_bundles_all_finding_kinds() {
        let resume = "Python and Docker daily; some AWS. Kubernetes on the side.";
        let bullets = vec!["Built Python services cutting costs by 30%".to_string()];
        let report = analyze(JD, resume, &bullets);

        assert!(!report.overlaps.is_empty());
        assert!(!report.gaps.is_empty());
        // Docker/AWS/Kubernetes claimed but never backed by a bullet
        assert!(report
            .under_evidenced
            .iter()
            .any(|u| u.skill == "Kubernetes"));
    }

    #[test]
    fn test_analyze_empty_documents_is_neutral_not_fit() {
        let report = analyze("", "", &[]);
        assert!(report.overlaps.is_empty());
        assert!(report.gaps.is_empty());
        assert_eq!(report.fit.level, FitLevel::NotFit);
        assert!((report.fit.confidence - 0.5).abs() < f64::EPSILON);
        assert!(report.needs_escalation, "thin signal must flag escalation");
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let resume = "Python, Docker, AWS, PostgreSQL";
        let a = analyze(JD, resume, &[]);
        let b = analyze(JD, resume, &[]);
        assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze(JD, "Python and Terraform", &[]);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("overlaps").is_some());
        assert!(value.get("fit").is_some());
        assert!(value.get("needs_escalation").is_some());
    }
}
