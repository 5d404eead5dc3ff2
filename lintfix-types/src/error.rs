//! Data-carried error values for evaluation and apply artifacts.
//!
//! Errors are values inside the artifacts, never control flow. A caller
//! inspecting one aggregate can distinguish "no changes needed", "some
//! files failed", and "nothing could run at all".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error recorded by the evaluation engine or the apply step.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationError {
    /// The engine configuration could not be used.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A configured rule could not be resolved.
    #[error("rule not found: {rule}")]
    RuleNotFound { rule: String },

    /// The file set submitted for evaluation was empty.
    #[error("no files to evaluate")]
    NoFilesToEvaluate,

    /// No rules were configured for the run.
    #[error("no rules configured")]
    NoRulesConfigured,

    /// A source file could not be parsed.
    #[error("parse failed for {path}: {message}")]
    ParseFailed { path: String, message: String },

    /// On-disk content no longer matches what the evaluation ran against.
    #[error("stale file: {path}")]
    StaleFile { path: String },

    /// A target file could not be read back before writing.
    #[error("read failed for {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// Writing a patched file failed.
    #[error("write failed for {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// Anything the engine could not classify.
    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl EvaluationError {
    /// True for errors that only the apply step can produce.
    pub fn is_apply_error(&self) -> bool {
        matches!(
            self,
            EvaluationError::StaleFile { .. }
                | EvaluationError::ReadFailed { .. }
                | EvaluationError::WriteFailed { .. }
        )
    }
}
