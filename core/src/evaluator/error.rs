//! Typed evaluation errors.
//!
//! Display text preserves the calculator's historical wording verbatim,
//! including the "Invalid Numer!" spelling; the CLI prefixes it with
//! `Error: ` when rendering.

use thiserror::Error;

/// Evaluation failure. A closed set: every way an evaluation can go wrong
/// is one of these kinds, carried as a value rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` was zero.
    #[error("Division by zero!")]
    DivisionByZero,

    /// An operator symbol outside the `+ - * /` set.
    #[error("Invalid Operator!")]
    InvalidOperator,

    /// A numeric literal whose magnitude does not fit in an `i64`.
    #[error("Invalid Numer!")]
    InvalidNumber,

    /// The tree handed to the evaluator does not have the shape the grammar
    /// guarantees. Only reachable through a non-conforming tree.
    #[error("Malformed expression tree!")]
    MalformedTree,
}
