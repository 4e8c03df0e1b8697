// All LLM prompt constants for the escalation module.
// Reuses the JSON-only fragment style from llm_client.

/// System prompt for fit enhancement — enforces JSON-only output.
pub const ENHANCE_SYSTEM: &str =
    "You are an expert technical recruiter comparing a resume against a job description. \
    You supplement a deterministic keyword analysis with skills it missed. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fit enhancement prompt template.
/// Replace `{jd_text}`, `{resume_text}`, `{known_skills}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"A deterministic keyword scan already identified these skills (do NOT repeat them):
{known_skills}

Find ADDITIONAL skills the scan missed — synonyms, abbreviations, or implied experience
(e.g. "k8s" implies Kubernetes, "built REST endpoints in Express" implies Node.js).

Return a JSON object with this EXACT schema (no extra fields):
{
  "overlaps": [
    {"skill": "Kubernetes", "confidence": 0.7}
  ],
  "gaps": [
    {"skill": "Terraform", "severity": "MEDIUM"}
  ]
}

Rules:
1. "overlaps": skills evidenced in BOTH documents. Use the skill's canonical spelling
   as it literally appears in the job description. confidence is 0.0-1.0 and must
   reflect how direct the evidence is (synonym match <= 0.8).
2. "gaps": skills the job description demands that the resume does not cover at all.
   severity is "HIGH", "MEDIUM", or "LOW" based on how strongly the JD requires it.
3. Only name skills whose exact text occurs in the job description.
4. Return empty arrays when there is nothing to add.

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}"#;
