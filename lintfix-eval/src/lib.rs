//! Engine boundary for lintfix.
//!
//! The evaluation engine itself is an external collaborator: given a
//! configuration and a set of files, it produces one
//! [`Evaluation`](lintfix_types::evaluation::Evaluation). This crate
//! defines the seams it plugs into:
//!
//! - [`Evaluator`](evaluator::Evaluator) — the collaborator contract
//! - [`SourceView`](ports::SourceView) — read-only source access, with a
//!   filesystem adapter
//! - [`EvaluationBuilder`](builder::EvaluationBuilder) — order-stable,
//!   invariant-enforcing assembly of the aggregate
//! - [`load_evaluation`](artifact::load_evaluation) — artifact loading
//!   with schema and invariant validation

pub mod artifact;
pub mod builder;
pub mod evaluator;
pub mod ports;

pub use artifact::load_evaluation;
pub use builder::EvaluationBuilder;
pub use evaluator::{EvalConfig, EvalContext, Evaluator};
pub use ports::{FsSourceView, SourceView};
