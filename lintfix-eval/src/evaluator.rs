use camino::Utf8PathBuf;
use lintfix_types::evaluation::Evaluation;
use std::collections::HashMap;

/// Rule selection and parameters for one evaluation run.
#[derive(Debug, Clone, Default)]
pub struct EvalConfig {
    /// Rule ids to run, in order.
    pub rules: Vec<String>,
    /// Free-form rule parameters.
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct EvalContext {
    pub repo_root: Utf8PathBuf,
    pub config: EvalConfig,
}

/// The evaluation engine contract.
///
/// The signature is infallible on purpose: every failure is carried
/// inside the returned aggregate as data, so a caller can batch-report
/// independent failures from one pass. An implementation may evaluate
/// files in parallel internally, but must return an already-settled
/// aggregate whose file entries follow the submission order of `files`.
pub trait Evaluator {
    fn evaluate(&self, ctx: &EvalContext, files: &[Utf8PathBuf]) -> Evaluation;
}
