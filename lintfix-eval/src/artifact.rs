//! Loading and saving evaluation artifacts.
//!
//! An engine in another process hands its result over as JSON; the
//! loader re-checks the contract invariants so downstream consumers can
//! trust the `successful` flag.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use lintfix_types::evaluation::Evaluation;
use tracing::debug;

/// Read an evaluation artifact, rejecting malformed or lying aggregates.
pub fn load_evaluation(path: &Utf8Path) -> anyhow::Result<Evaluation> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let eval: Evaluation =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path))?;

    let problems = eval.validate();
    if !problems.is_empty() {
        anyhow::bail!("invalid evaluation artifact {}: {}", path, problems.join("; "));
    }

    debug!(
        "loaded evaluation: successful={} files={} errors={}",
        eval.is_successful(),
        eval.file_evaluations().len(),
        eval.errors().len()
    );
    Ok(eval)
}

/// Write an evaluation artifact as pretty-printed JSON.
pub fn save_evaluation(path: &Utf8Path, eval: &Evaluation) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(eval).context("serialize evaluation")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}
