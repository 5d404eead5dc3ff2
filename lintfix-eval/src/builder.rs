use lintfix_types::error::EvaluationError;
use lintfix_types::evaluation::{Evaluation, FileEvaluation};
use lintfix_types::tool::ToolInfo;

/// Order-stable assembly of an [`Evaluation`].
///
/// Engines push file entries in submission order and process errors as
/// they surface; `finish` computes the `successful` flag from the stored
/// fields, so builder-produced aggregates always pass
/// [`Evaluation::validate`].
#[derive(Debug)]
pub struct EvaluationBuilder {
    tool: ToolInfo,
    errors: Vec<EvaluationError>,
    files: Vec<FileEvaluation>,
}

impl EvaluationBuilder {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            tool,
            errors: vec![],
            files: vec![],
        }
    }

    /// Record a process-level error (not tied to one file).
    pub fn push_error(&mut self, err: EvaluationError) -> &mut Self {
        self.errors.push(err);
        self
    }

    /// Record the outcome for the next submitted file.
    pub fn push_file(&mut self, file: FileEvaluation) -> &mut Self {
        self.files.push(file);
        self
    }

    /// Abort: evaluation could not proceed at all.
    ///
    /// Any file entries pushed so far are dropped; a fatal aggregate
    /// carries process errors and the message only.
    pub fn fatal(self, message: impl Into<String>) -> Evaluation {
        Evaluation::fatal(self.tool, message, self.errors)
    }

    pub fn finish(self) -> Evaluation {
        let successful =
            self.errors.is_empty() && self.files.iter().all(FileEvaluation::is_success);

        Evaluation {
            schema: lintfix_types::schema::LINTFIX_EVALUATION_V1.to_string(),
            tool: self.tool,
            successful,
            errors: self.errors,
            fatal_message: None,
            file_evaluations: self.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EvaluationBuilder;
    use camino::Utf8PathBuf;
    use lintfix_types::error::EvaluationError;
    use lintfix_types::evaluation::FileEvaluation;
    use lintfix_types::tool::ToolInfo;
    use pretty_assertions::assert_eq;

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "stub-engine".to_string(),
            version: "0.0.1".to_string(),
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

    #[test]
    fn finish_computes_successful_from_pushed_entries() {
        let mut b = EvaluationBuilder::new(tool());
        b.push_file(success("a.rs"));
        b.push_file(success("b.rs"));
        let eval = b.finish();

        assert!(eval.is_successful());
        assert!(eval.validate().is_empty());
    }

    #[test]
    fn process_error_makes_run_unsuccessful() {
        let mut b = EvaluationBuilder::new(tool());
        b.push_error(EvaluationError::RuleNotFound {
            rule: "NoSuchRule".to_string(),
        });
        b.push_file(success("a.rs"));
        let eval = b.finish();

        assert!(!eval.is_successful());
        assert_eq!(eval.errors().len(), 1);
        assert!(eval.validate().is_empty());
    }

    #[test]
    fn fatal_drops_file_entries_and_keeps_errors() {
        let mut b = EvaluationBuilder::new(tool());
        b.push_file(success("a.rs"));
        b.push_error(EvaluationError::InvalidConfiguration {
            message: "bad rules file".to_string(),
        });
        let eval = b.fatal("configuration could not be loaded");

        assert!(!eval.is_successful());
        assert_eq!(eval.fatal_message(), Some("configuration could not be loaded"));
        assert!(eval.file_evaluations().is_empty());
        assert_eq!(eval.errors().len(), 1);
        assert!(eval.validate().is_empty());
    }

    #[test]
    fn builder_preserves_submission_order() {
        let mut b = EvaluationBuilder::new(tool());
        for name in ["z.rs", "a.rs", "m.rs"] {
            b.push_file(success(name));
        }
        let eval = b.finish();

        let paths: Vec<&str> = eval
            .file_evaluations()
            .iter()
            .map(|f| f.path().as_str())
            .collect();
        assert_eq!(paths, vec!["z.rs", "a.rs", "m.rs"]);
    }
}
