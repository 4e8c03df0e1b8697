//! Escalation — the two-phase call pattern around the deterministic engine.
//!
//! Phase 1: pure deterministic pass (`analysis::report::analyze`).
//! Phase 2 (only when flagged): an `EscalationProvider` supplies model-derived
//! supplemental findings, which are merged into the deterministic sets and
//! rescored with the same pure scorer. Provider failure falls back to the
//! phase-1 result — the rules engine itself never fails.
//!
//! `EscalationProvider` is the swap seam: `LlmEscalator` in production, mock
//! providers in tests.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::classifier::{GapItem, OverlapItem, Severity};
use crate::analysis::fit::{calculate_fit, needs_escalation};
use crate::analysis::report::{analyze, FitAnalysis};
use crate::analysis::span::{locate, ResumeSpan};
use crate::errors::AppError;
use crate::escalation::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Enhancement claims
// ────────────────────────────────────────────────────────────────────────────

/// A model-claimed overlap: a skill evidenced in both documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillClaim {
    pub skill: String,
    pub confidence: f64,
}

/// A model-claimed gap with the severity the model assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapClaim {
    pub skill: String,
    pub severity: Severity,
}

/// Supplemental findings returned by an escalation provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enhancement {
    pub overlaps: Vec<SkillClaim>,
    pub gaps: Vec<GapClaim>,
}

// ────────────────────────────────────────────────────────────────────────────
// Provider seam
// ────────────────────────────────────────────────────────────────────────────

/// Produces supplemental findings when the deterministic signal is weak.
/// Implementations are slow and fallible; the orchestrator owns the fallback.
#[async_trait]
pub trait EscalationProvider: Send + Sync {
    async fn enhance(
        &self,
        jd_text: &str,
        resume_text: &str,
        analysis: &FitAnalysis,
    ) -> Result<Enhancement, AppError>;
}

/// Escalation provider backed by the LLM client.
pub struct LlmEscalator {
    llm: LlmClient,
}

impl LlmEscalator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EscalationProvider for LlmEscalator {
    async fn enhance(
        &self,
        jd_text: &str,
        resume_text: &str,
        analysis: &FitAnalysis,
    ) -> Result<Enhancement, AppError> {
        let prompt = build_enhance_prompt(jd_text, resume_text, analysis);
        self.llm
            .call_json::<Enhancement>(&prompt, ENHANCE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Fit enhancement call failed: {e}")))
    }
}

/// Fills the enhancement template with both documents and the already-known
/// skill list (so the model does not repeat deterministic findings).
fn build_enhance_prompt(jd_text: &str, resume_text: &str, analysis: &FitAnalysis) -> String {
    let known: Vec<&str> = analysis
        .overlaps
        .iter()
        .map(|o| o.skill.as_str())
        .chain(analysis.gaps.iter().map(|g| g.skill.as_str()))
        .collect();

    ENHANCE_PROMPT_TEMPLATE
        .replace("{known_skills}", &known.join(", "))
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text)
}

// ────────────────────────────────────────────────────────────────────────────
// Merge + orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Merges model-supplied claims into the deterministic sets.
///
/// Rules:
/// - A claimed overlap is accepted only if its span can be located in BOTH
///   documents (same skip rule as the deterministic classifier). An accepted
///   overlap evicts any gap for the same skill.
/// - A claimed gap is accepted only if the skill is not already an overlap or
///   gap, its JD span can be located, and the skill does NOT occur in the
///   resume text (a skill present in both documents is never a gap).
/// - Skills compare case-insensitively; duplicates are never introduced, so
///   the gap-complement invariant survives the merge.
pub fn merge_findings(
    analysis: &FitAnalysis,
    enhancement: &Enhancement,
    jd_text: &str,
    resume_text: &str,
) -> (Vec<OverlapItem>, Vec<GapItem>) {
    let mut overlaps = analysis.overlaps.clone();
    let mut gaps = analysis.gaps.clone();

    let has_skill = |items: &[OverlapItem], skill: &str| {
        items.iter().any(|o| o.skill.eq_ignore_ascii_case(skill))
    };

    for claim in &enhancement.overlaps {
        if has_skill(&overlaps, &claim.skill) {
            continue;
        }
        let Some(jd_span) = locate(&claim.skill, jd_text) else {
            continue;
        };
        let Some(resume_span) = locate(&claim.skill, resume_text) else {
            continue;
        };
        gaps.retain(|g| !g.skill.eq_ignore_ascii_case(&claim.skill));
        overlaps.push(OverlapItem {
            skill: claim.skill.clone(),
            jd_span,
            resume_span: ResumeSpan::unstructured(resume_span),
            confidence: claim.confidence.clamp(0.0, 1.0),
        });
    }

    for claim in &enhancement.gaps {
        if has_skill(&overlaps, &claim.skill)
            || gaps.iter().any(|g| g.skill.eq_ignore_ascii_case(&claim.skill))
            || locate(&claim.skill, resume_text).is_some()
        {
            continue;
        }
        let Some(jd_span) = locate(&claim.skill, jd_text) else {
            continue;
        };
        gaps.push(GapItem {
            skill: claim.skill.clone(),
            jd_span,
            severity: claim.severity,
        });
    }

    (overlaps, gaps)
}

/// Runs the full two-phase pipeline.
///
/// Deterministic pass first; when it flags escalation and a provider is
/// available, merges the provider's claims and rescores. A provider error is
/// logged and the deterministic result returned unchanged.
pub async fn run(
    jd_text: &str,
    resume_text: &str,
    resume_bullets: &[String],
    provider: Option<&dyn EscalationProvider>,
) -> FitAnalysis {
    let analysis = analyze(jd_text, resume_text, resume_bullets);

    if !analysis.needs_escalation {
        return analysis;
    }
    let Some(provider) = provider else {
        return analysis;
    };

    info!(
        level = ?analysis.fit.level,
        confidence = analysis.fit.confidence,
        "deterministic signal weak, escalating"
    );

    match provider.enhance(jd_text, resume_text, &analysis).await {
        Ok(enhancement) => {
            let (overlaps, gaps) = merge_findings(&analysis, &enhancement, jd_text, resume_text);
            let fit = calculate_fit(&overlaps, &gaps);
            let still_weak = needs_escalation(&overlaps, &gaps);
            info!(
                added_overlaps = overlaps.len() - analysis.overlaps.len(),
                level = ?fit.level,
                confidence = fit.confidence,
                "rescored after enhancement"
            );
            FitAnalysis {
                overlaps,
                gaps,
                under_evidenced: analysis.under_evidenced,
                fit,
                needs_escalation: still_weak,
            }
        }
        Err(e) => {
            warn!("Escalation failed, falling back to deterministic result: {e}");
            analysis
        }
    }
}
