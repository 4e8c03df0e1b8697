use thiserror::Error;

/// Application-level error type.
///
/// The rules engine itself is total and never returns errors — these cover
/// the fallible edges only: document loading and the escalation call.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
