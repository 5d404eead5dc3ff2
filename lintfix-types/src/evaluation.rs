//! The evaluation artifact: outcome of running an engine over a batch of files.
//!
//! The aggregate is produced once, after all files are processed, and is
//! read-only afterward. Persisting the computed patches is a separate
//! step (`lintfix-apply`); nothing in this module touches the filesystem.

use crate::diagnostic::Diagnostic;
use crate::error::EvaluationError;
use crate::tool::ToolInfo;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Outcome of one evaluation run.
///
/// Invariants (checked by [`Evaluation::validate`]):
/// - `successful` is true iff `errors` is empty and every entry of
///   `file_evaluations` is the `Success` variant.
/// - When `fatal_message` is set, `file_evaluations` is empty and
///   `successful` is false.
/// - `file_evaluations` preserves submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub schema: String,
    pub tool: ToolInfo,
    pub successful: bool,

    /// Process-level errors not tied to one file (bad configuration,
    /// rule loading failure). Empty means none; never absent.
    #[serde(default)]
    pub errors: Vec<EvaluationError>,

    /// Set only when evaluation could not proceed at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_message: Option<String>,

    /// One entry per file submitted for evaluation, in submission order.
    #[serde(default)]
    pub file_evaluations: Vec<FileEvaluation>,
}

impl Evaluation {
    /// An evaluation that aborted before producing per-file results.
    pub fn fatal(
        tool: ToolInfo,
        message: impl Into<String>,
        errors: Vec<EvaluationError>,
    ) -> Self {
        Self {
            schema: crate::schema::LINTFIX_EVALUATION_V1.to_string(),
            tool,
            successful: false,
            errors,
            fatal_message: Some(message.into()),
            file_evaluations: vec![],
        }
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn errors(&self) -> &[EvaluationError] {
        &self.errors
    }

    pub fn fatal_message(&self) -> Option<&str> {
        self.fatal_message.as_deref()
    }

    pub fn file_evaluations(&self) -> &[FileEvaluation] {
        &self.file_evaluations
    }

    /// The `successful` value the stored fields imply.
    pub fn derived_successful(&self) -> bool {
        self.fatal_message.is_none()
            && self.errors.is_empty()
            && self.file_evaluations.iter().all(FileEvaluation::is_success)
    }

    /// Consistency check of the stored flags against the invariants.
    ///
    /// Returns human-readable violations; empty means the artifact is
    /// well-formed. Loaders reject artifacts with violations.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.schema != crate::schema::LINTFIX_EVALUATION_V1 {
            problems.push(format!("unknown schema id: {}", self.schema));
        }

        if self.fatal_message.is_some() && !self.file_evaluations.is_empty() {
            problems.push(format!(
                "fatal evaluation carries {} file entries; expected none",
                self.file_evaluations.len()
            ));
        }

        if self.successful != self.derived_successful() {
            problems.push(format!(
                "successful flag is {} but stored errors and file entries imply {}",
                self.successful,
                self.derived_successful()
            ));
        }

        problems
    }
}

/// Per-file outcome: either the computed patches or the errors that
/// stopped the file from being evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileEvaluation {
    Success {
        /// Evaluated file, relative to the repo root.
        path: Utf8PathBuf,

        /// Descriptors of the patches the engine computed, in the order
        /// they were produced. Patch internals stay the engine's business.
        #[serde(default)]
        patches: Vec<PatchDescriptor>,

        #[serde(default)]
        diagnostics: Vec<Diagnostic>,

        /// Unified-diff text rendered by the engine; empty when no
        /// change was computed.
        #[serde(default)]
        unified_diff: String,

        /// Digest of the content the evaluation ran against. Apply
        /// preconditions check the on-disk file against it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        original_sha256: Option<String>,

        /// Full post-patch content; `None` when the file needs no change.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fixed_contents: Option<String>,
    },
    Failure {
        path: Utf8PathBuf,

        /// Errors specific to this file. Other files' results stay usable.
        #[serde(default)]
        errors: Vec<EvaluationError>,
    },
}

impl FileEvaluation {
    pub fn path(&self) -> &Utf8Path {
        match self {
            FileEvaluation::Success { path, .. } => path,
            FileEvaluation::Failure { path, .. } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileEvaluation::Success { .. })
    }
}

/// Opaque descriptor of one computed patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchDescriptor {
    /// Id of the rule that produced the patch.
    pub rule: String,
    /// Human-readable one-liner describing the change.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::{Evaluation, FileEvaluation};
    use crate::error::EvaluationError;
    use crate::tool::ToolInfo;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "lintfix".to_string(),
            version: "0.1.0".to_string(),
            commit: None,
        }
    }

    fn success(path: &str) -> FileEvaluation {
        FileEvaluation::Success {
            path: Utf8PathBuf::from(path),
            patches: vec![],
            diagnostics: vec![],
            unified_diff: String::new(),
            original_sha256: None,
            fixed_contents: None,
        }
    }

    fn failure(path: &str) -> FileEvaluation {
        FileEvaluation::Failure {
            path: Utf8PathBuf::from(path),
            errors: vec![EvaluationError::ParseFailed {
                path: path.to_string(),
                message: "unexpected token".to_string(),
            }],
        }
    }

    fn well_formed(errors: Vec<EvaluationError>, files: Vec<FileEvaluation>) -> Evaluation {
        let successful = errors.is_empty() && files.iter().all(FileEvaluation::is_success);
        Evaluation {
            schema: crate::schema::LINTFIX_EVALUATION_V1.to_string(),
            tool: tool(),
            successful,
            errors,
            fatal_message: None,
            file_evaluations: files,
        }
    }

    #[test]
    fn fatal_constructor_upholds_invariants() {
        let eval = Evaluation::fatal(
            tool(),
            "could not load configuration",
            vec![EvaluationError::InvalidConfiguration {
                message: "missing rules section".to_string(),
            }],
        );

        assert!(!eval.is_successful());
        assert_eq!(eval.fatal_message(), Some("could not load configuration"));
        assert!(eval.file_evaluations().is_empty());
        assert_eq!(eval.validate(), Vec::<String>::new());
    }

    #[test]
    fn one_failing_file_flips_successful() {
        let eval = well_formed(vec![], vec![success("a.rs"), failure("b.rs"), success("c.rs")]);

        assert!(!eval.is_successful());
        assert_eq!(eval.file_evaluations().len(), 3);
        assert!(!eval.file_evaluations()[1].is_success());
        assert!(eval.file_evaluations()[0].is_success());
        assert!(eval.file_evaluations()[2].is_success());
        assert_eq!(eval.validate(), Vec::<String>::new());
    }

    #[test]
    fn file_entries_keep_submission_order() {
        let eval = well_formed(vec![], vec![success("z.rs"), success("a.rs"), success("m.rs")]);

        let paths: Vec<&str> = eval
            .file_evaluations()
            .iter()
            .map(|f| f.path().as_str())
            .collect();
        assert_eq!(paths, vec!["z.rs", "a.rs", "m.rs"]);
    }

    #[test]
    fn validate_rejects_lying_successful_flag() {
        let mut eval = well_formed(vec![], vec![failure("b.rs")]);
        eval.successful = true;

        let problems = eval.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("successful flag"));
    }

    #[test]
    fn validate_rejects_fatal_with_file_entries() {
        let mut eval = Evaluation::fatal(tool(), "boom", vec![]);
        eval.file_evaluations.push(success("a.rs"));

        let problems = eval.validate();
        assert!(problems.iter().any(|p| p.contains("fatal evaluation")));
    }

    #[test]
    fn file_evaluation_serializes_with_status_tag() {
        let json = serde_json::to_string(&success("a.rs")).expect("serialize");
        assert!(json.contains(r#""status":"success""#));

        let json = serde_json::to_string(&failure("b.rs")).expect("serialize");
        assert!(json.contains(r#""status":"failure""#));
    }

    proptest! {
        #[test]
        fn successful_matches_invariant_for_any_mix(
            error_count in 0usize..3,
            statuses in proptest::collection::vec(any::<bool>(), 0..8),
        ) {
            let errors = (0..error_count)
                .map(|_| EvaluationError::NoRulesConfigured)
                .collect::<Vec<_>>();
            let files = statuses
                .iter()
                .enumerate()
                .map(|(i, ok)| {
                    let path = format!("f{i}.rs");
                    if *ok { success(&path) } else { failure(&path) }
                })
                .collect::<Vec<_>>();

            let eval = well_formed(errors, files);

            prop_assert_eq!(
                eval.is_successful(),
                eval.errors().is_empty()
                    && eval.file_evaluations().iter().all(FileEvaluation::is_success)
            );
            prop_assert!(eval.validate().is_empty());
        }
    }
}
