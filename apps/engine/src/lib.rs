//! Fit Scoring Rules Engine.
//!
//! Deterministic analysis of a job description against a resume: keyword
//! extraction, span-cited overlap/gap/under-evidence classification, and a
//! categorical fit score with confidence. The `escalation` module wraps the
//! engine in the two-phase pattern that defers to a hosted model when the
//! deterministic signal is weak.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod escalation;
pub mod llm_client;

pub use analysis::classifier::{
    find_gaps, find_overlaps, find_under_evidenced, GapItem, OverlapItem, Severity,
    UnderEvidencedItem,
};
pub use analysis::extractor::extract_keywords;
pub use analysis::fit::{calculate_fit, needs_escalation, FitLevel, FitResult};
pub use analysis::report::{analyze, FitAnalysis};
pub use analysis::span::{locate, ResumeSpan, TextSpan};
