//! Apply engine for lintfix evaluations.
//!
//! Responsibilities:
//! - Persist the `fixed_contents` of Success file entries to disk.
//! - Enforce sha256 preconditions against the content the evaluation ran on.
//! - Report every outcome as data; the function itself never fails.
//!
//! Evaluation computes what *would* change; this step performs the actual
//! mutation. All filesystem writes in the workspace are confined here.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use fs_err as fs;
use lintfix_types::apply::{ApplyStatus, EvaluationApply, FileApplyResult};
use lintfix_types::error::EvaluationError;
use lintfix_types::evaluation::{Evaluation, FileEvaluation};
use lintfix_types::tool::ToolInfo;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// Report what would happen without writing anything.
    pub dry_run: bool,
    /// Refuse to overwrite files whose content drifted from the
    /// `original_sha256` recorded in the evaluation.
    pub require_clean_hashes: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            require_clean_hashes: true,
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn abs_path(repo_root: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        repo_root.join(rel)
    }
}

/// Write every computed patch from the evaluation's Success entries.
///
/// Returns an apply artifact whose `errors` field is the sequence of
/// errors encountered while writing; empty means full success. A second
/// run over unchanged files is a per-file no-op reported as
/// `already_applied`. Failure file entries have nothing to persist and
/// produce no result row.
pub fn apply_evaluation(
    repo_root: &Utf8Path,
    eval: &Evaluation,
    tool: ToolInfo,
    opts: &ApplyOptions,
) -> EvaluationApply {
    let mut apply = EvaluationApply::new(tool);
    apply.applied = !opts.dry_run;

    for entry in eval.file_evaluations() {
        let FileEvaluation::Success {
            path,
            original_sha256,
            fixed_contents,
            ..
        } = entry
        else {
            continue;
        };

        let mut result = FileApplyResult {
            path: path.clone(),
            status: ApplyStatus::Skipped,
            message: None,
            sha256_before: None,
            sha256_after: None,
        };

        let Some(fixed) = fixed_contents else {
            result.message = Some("no change computed".to_string());
            apply.summary.skipped += 1;
            apply.results.push(result);
            continue;
        };

        apply.summary.attempted += 1;
        let abs = abs_path(repo_root, path);

        let current = match fs::read_to_string(&abs) {
            Ok(c) => c,
            Err(e) => {
                result.status = ApplyStatus::Failed;
                result.message = Some(e.to_string());
                apply.summary.failed += 1;
                apply.errors.push(EvaluationError::ReadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                });
                apply.results.push(result);
                continue;
            }
        };

        let current_sha = sha256_hex(current.as_bytes());
        result.sha256_before = Some(current_sha.clone());

        if &current == fixed {
            debug!("{}: already applied", path);
            result.status = ApplyStatus::AlreadyApplied;
            result.sha256_after = Some(current_sha);
            apply.summary.already_applied += 1;
            apply.results.push(result);
            continue;
        }

        if opts.require_clean_hashes
            && let Some(expected) = original_sha256
            && expected != &current_sha
        {
            result.status = ApplyStatus::Stale;
            result.message = Some(format!(
                "content drifted: expected sha256 {expected}, found {current_sha}"
            ));
            apply.summary.stale += 1;
            apply.errors.push(EvaluationError::StaleFile {
                path: path.to_string(),
            });
            apply.results.push(result);
            continue;
        }

        if opts.dry_run {
            result.status = ApplyStatus::Skipped;
            result.message = Some("dry-run: not written".to_string());
            apply.summary.skipped += 1;
            apply.results.push(result);
            continue;
        }

        match fs::write(&abs, fixed) {
            Ok(()) => {
                info!("{}: patched", path);
                result.status = ApplyStatus::Applied;
                result.sha256_after = Some(sha256_hex(fixed.as_bytes()));
                apply.summary.applied += 1;
            }
            Err(e) => {
                result.status = ApplyStatus::Failed;
                result.message = Some(e.to_string());
                apply.summary.failed += 1;
                apply.errors.push(EvaluationError::WriteFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                });
            }
        }
        apply.results.push(result);
    }

    apply.run.ended_at = Some(Utc::now());
    apply
}
