//! Rendering helpers (markdown) for human-readable artifacts.

use lintfix_types::apply::{ApplyStatus, EvaluationApply};
use lintfix_types::diagnostic::Severity;
use lintfix_types::evaluation::{Evaluation, FileEvaluation};

pub fn render_evaluation_md(eval: &Evaluation) -> String {
    let mut out = String::new();
    out.push_str("# lintfix evaluation\n\n");
    out.push_str(&format!("- Successful: `{}`\n", eval.is_successful()));
    out.push_str(&format!("- Files evaluated: {}\n", eval.file_evaluations().len()));
    out.push_str(&format!("- Process errors: {}\n", eval.errors().len()));

    if let Some(msg) = eval.fatal_message() {
        out.push_str(&format!("\n**Fatal:** {}\n", msg));
    }

    if !eval.errors().is_empty() {
        out.push_str("\n## Process errors\n\n");
        for err in eval.errors() {
            out.push_str(&format!("- {}\n", err));
        }
    }

    if eval.file_evaluations().is_empty() {
        out.push_str("\n_No file evaluations._\n");
        return out;
    }

    out.push_str("\n## Files\n\n");
    for entry in eval.file_evaluations() {
        match entry {
            FileEvaluation::Success {
                path,
                patches,
                diagnostics,
                unified_diff,
                ..
            } => {
                out.push_str(&format!("### {}\n\n", path));

                if !diagnostics.is_empty() {
                    for diag in diagnostics {
                        let loc = diag
                            .position
                            .map(|p| format!("{}:{}:{}", path, p.line, p.column))
                            .unwrap_or_else(|| path.to_string());
                        out.push_str(&format!(
                            "- `{}` {} `{}` at {}\n",
                            diag.rule,
                            severity_label(diag.severity),
                            diag.message,
                            loc
                        ));
                    }
                    out.push('\n');
                }

                if patches.is_empty() {
                    out.push_str("_No patches._\n\n");
                } else {
                    out.push_str("**Patches**\n\n");
                    for patch in patches {
                        out.push_str(&format!("- `{}`: {}\n", patch.rule, patch.label));
                    }
                    out.push('\n');
                }

                if !unified_diff.is_empty() {
                    out.push_str("```diff\n");
                    out.push_str(unified_diff);
                    if !unified_diff.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str("```\n\n");
                }
            }
            FileEvaluation::Failure { path, errors } => {
                out.push_str(&format!("### {} (failed)\n\n", path));
                for err in errors {
                    out.push_str(&format!("- {}\n", err));
                }
                out.push('\n');
            }
        }
    }

    out
}

pub fn render_apply_md(apply: &EvaluationApply) -> String {
    let mut out = String::new();
    out.push_str("# lintfix apply\n\n");
    out.push_str(&format!("- Applied: `{}`\n", apply.applied));
    out.push_str(&format!(
        "- Attempted: {} (applied {}, already applied {}, skipped {}, stale {}, failed {})\n",
        apply.summary.attempted,
        apply.summary.applied,
        apply.summary.already_applied,
        apply.summary.skipped,
        apply.summary.stale,
        apply.summary.failed
    ));

    if !apply.errors.is_empty() {
        out.push_str("\n## Errors\n\n");
        for err in &apply.errors {
            out.push_str(&format!("- {}\n", err));
        }
    }

    if apply.results.is_empty() {
        out.push_str("\n_Nothing to apply._\n");
        return out;
    }

    out.push_str("\n## Files\n\n");
    for result in &apply.results {
        out.push_str(&format!(
            "- `{}` `{}`",
            result.path,
            status_label(result.status)
        ));
        if let Some(msg) = &result.message {
            out.push_str(&format!(": {}", msg));
        }
        out.push('\n');
    }

    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
        Severity::Hint => "hint",
    }
}

fn status_label(status: ApplyStatus) -> &'static str {
    match status {
        ApplyStatus::Applied => "applied",
        ApplyStatus::AlreadyApplied => "already_applied",
        ApplyStatus::Skipped => "skipped",
        ApplyStatus::Stale => "stale",
        ApplyStatus::Failed => "failed",
    }
}
