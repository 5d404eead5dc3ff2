use crate::error::EvaluationError;
use crate::tool::{RunInfo, ToolInfo};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Outcome of persisting an evaluation's computed patches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationApply {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,

    /// False for dry runs: results are reported but nothing was written.
    pub applied: bool,

    #[serde(default)]
    pub results: Vec<FileApplyResult>,
    pub summary: ApplySummary,

    /// Errors encountered while writing; empty means full success.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<EvaluationError>,
}

impl EvaluationApply {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::LINTFIX_APPLY_V1.to_string(),
            tool,
            run: RunInfo::started_now(),
            applied: false,
            results: vec![],
            summary: ApplySummary::default(),
            errors: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileApplyResult {
    pub path: Utf8PathBuf,
    pub status: ApplyStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStatus {
    Applied,
    /// On-disk content already equals the fixed content; no-op.
    AlreadyApplied,
    /// Nothing to write (no change computed, or dry run).
    Skipped,
    /// On-disk content drifted from what the evaluation ran against.
    Stale,
    Failed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplySummary {
    pub attempted: u64,
    pub applied: u64,
    pub already_applied: u64,
    pub skipped: u64,
    pub stale: u64,
    pub failed: u64,
}
