// Fit Scoring Rules Engine — deterministic text analysis.
// Implements: keyword extraction, span location, overlap/gap/under-evidence
// classification, fit scoring. No I/O, no LLM calls — escalation lives in
// the `escalation` module.

pub mod classifier;
pub mod extractor;
pub mod fit;
pub mod matcher;
pub mod report;
pub mod span;
pub mod vocabulary;
