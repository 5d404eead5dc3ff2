//! Shared DTOs (schemas-as-code) for the lintfix workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod apply;
pub mod diagnostic;
pub mod error;
pub mod evaluation;
pub mod tool;

/// Schema identifiers.
pub mod schema {
    pub const LINTFIX_EVALUATION_V1: &str = "lintfix.evaluation.v1";
    pub const LINTFIX_APPLY_V1: &str = "lintfix.apply.v1";
}
