//! Fit scoring — collapses overlap/gap findings into one categorical verdict
//! plus a confidence estimate, and decides when the deterministic signal is
//! too weak to stand alone.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{GapItem, OverlapItem, Severity};

/// Score contribution per overlap.
const OVERLAP_WEIGHT: f64 = 2.0;
/// Score penalties per gap, by severity.
const HIGH_GAP_WEIGHT: f64 = 3.0;
const MEDIUM_GAP_WEIGHT: f64 = 1.5;
const LOW_GAP_WEIGHT: f64 = 0.5;

/// Classification thresholds. Exact, non-configurable design constants.
const FIT_THRESHOLD: f64 = 10.0;
const BORDERLINE_THRESHOLD: f64 = 5.0;

/// Confidence when no signal is present at all.
const NEUTRAL_CONFIDENCE: f64 = 0.5;
/// Confidence ceiling.
const MAX_CONFIDENCE: f64 = 0.95;
/// Minimum finding count per side before the signal counts as sufficient.
const MIN_SIGNAL_COUNT: usize = 3;
/// Confidence below which escalation is always requested.
const ESCALATION_CONFIDENCE_FLOOR: f64 = 0.7;

/// Three-way categorical verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitLevel {
    Fit,
    Borderline,
    NotFit,
}

/// Terminal output of one scoring pass. Recomputed, never mutated, whenever
/// the underlying overlap/gap sets change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub level: FitLevel,
    pub confidence: f64,
}

/// Aggregates findings into a fit level and confidence.
///
/// `score = 2·|overlaps| − 3·|HIGH gaps| − 1.5·|MEDIUM gaps| − 0.5·|LOW gaps|`.
/// Total over any input, including both sets empty.
pub fn calculate_fit(overlaps: &[OverlapItem], gaps: &[GapItem]) -> FitResult {
    let score = raw_score(overlaps, gaps);

    let level = if score >= FIT_THRESHOLD {
        FitLevel::Fit
    } else if score >= BORDERLINE_THRESHOLD {
        FitLevel::Borderline
    } else {
        FitLevel::NotFit
    };

    FitResult {
        level,
        confidence: confidence(overlaps.len() + gaps.len()),
    }
}

/// True when the deterministic result should be escalated to the external
/// model: too little signal on both sides, a borderline verdict, or low
/// confidence. Pure decision predicate — performs no escalation itself.
pub fn needs_escalation(overlaps: &[OverlapItem], gaps: &[GapItem]) -> bool {
    if overlaps.len() < MIN_SIGNAL_COUNT && gaps.len() < MIN_SIGNAL_COUNT {
        return true;
    }
    let result = calculate_fit(overlaps, gaps);
    result.level == FitLevel::Borderline || result.confidence < ESCALATION_CONFIDENCE_FLOOR
}

fn raw_score(overlaps: &[OverlapItem], gaps: &[GapItem]) -> f64 {
    let count_by = |s: Severity| gaps.iter().filter(|g| g.severity == s).count() as f64;

    OVERLAP_WEIGHT * overlaps.len() as f64
        - HIGH_GAP_WEIGHT * count_by(Severity::High)
        - MEDIUM_GAP_WEIGHT * count_by(Severity::Medium)
        - LOW_GAP_WEIGHT * count_by(Severity::Low)
}

fn confidence(finding_count: usize) -> f64 {
    if finding_count == 0 {
        return NEUTRAL_CONFIDENCE;
    }
    (NEUTRAL_CONFIDENCE + finding_count as f64 / 30.0).min(MAX_CONFIDENCE)
}
