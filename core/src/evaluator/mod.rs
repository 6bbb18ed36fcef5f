//! Tree-walking evaluator for parsed prefix expressions.
//!
//! The evaluator consumes the grammar tree produced by [`crate::parser`] and
//! reduces it to a single [`EvalOutcome`]: a signed 64-bit integer or a typed
//! error. Errors are data, never panics; an error produced anywhere in the
//! tree propagates unchanged to the top, left operand first.

mod eval;
mod operators;
pub mod error;


pub use error::EvalError;
pub use eval::evaluate;
pub use operators::apply_op;

/// The single value an evaluation produces: a number or a typed error.
///
/// `Ok` and `Err` are the only constructors, which closes the representable
/// state space to exactly those two variants. Outcomes are built fresh by
/// each reduction step and never mutated.
pub type EvalOutcome = Result<i64, EvalError>;
