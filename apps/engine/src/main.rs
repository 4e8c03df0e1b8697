use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::config::Config;
use engine::escalation::{self, EscalationProvider, LlmEscalator};
use engine::llm_client::LlmClient;

/// Scores a resume against a job description: skill overlaps, gaps with
/// severity, under-evidenced claims, and a categorical fit verdict.
#[derive(Debug, Parser)]
#[command(name = "engine", version)]
struct Args {
    /// Path to the job description text file.
    jd: PathBuf,

    /// Path to the resume text file.
    resume: PathBuf,

    /// Path to a file of resume bullets, one per line.
    #[arg(long)]
    bullets: Option<PathBuf>,

    /// Escalate to the hosted model when the deterministic signal is weak
    /// (requires ANTHROPIC_API_KEY).
    #[arg(long)]
    escalate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let jd_text = std::fs::read_to_string(&args.jd)
        .with_context(|| format!("Failed to read JD file {}", args.jd.display()))?;
    let resume_text = std::fs::read_to_string(&args.resume)
        .with_context(|| format!("Failed to read resume file {}", args.resume.display()))?;
    let bullets = match &args.bullets {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bullets file {}", path.display()))?
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect(),
        None => Vec::new(),
    };

    info!(
        jd_bytes = jd_text.len(),
        resume_bytes = resume_text.len(),
        bullets = bullets.len(),
        "Starting fit analysis"
    );

    let escalator = build_escalator(&args, &config);
    let report = escalation::run(&jd_text, &resume_text, &bullets, escalator.as_deref()).await;

    info!(level = ?report.fit.level, confidence = report.fit.confidence, "Analysis complete");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Wires up the LLM escalator when requested and a key is configured.
fn build_escalator(args: &Args, config: &Config) -> Option<Box<dyn EscalationProvider>> {
    if !args.escalate {
        return None;
    }
    match &config.anthropic_api_key {
        Some(key) => {
            info!("Escalation enabled (model: {})", engine::llm_client::MODEL);
            Some(Box::new(LlmEscalator::new(LlmClient::new(key.clone()))))
        }
        None => {
            warn!("--escalate requested but ANTHROPIC_API_KEY is not set; running deterministic only");
            None
        }
    }
}
