//! polcalc-core - parse and evaluate parenthesized-prefix arithmetic.
//!
//! One line of input like `+ 1 (* 2 3)` is parsed into a grammar tree and
//! reduced to a single outcome: a signed 64-bit integer, or a typed error
//! such as division by zero. The language is deliberately tiny: signed
//! integer literals and the four binary operators `+ - * /`, each applied to
//! two or more operands.
//!
//! # Quick start
//!
//! ```
//! use polcalc_core::eval_line;
//!
//! assert_eq!(eval_line("+ 1 (* 2 3)").unwrap(), Ok(7));
//! ```
//!
//! Parsing and evaluation are separate stages with separate error families:
//! [`parser::parse`] rejects malformed text with a [`ParseError`] carrying
//! pest's diagnostic, and [`evaluator::evaluate`] reduces a well-formed tree
//! to an [`EvalOutcome`], in which failures like division by zero are
//! ordinary values, not panics.

#![warn(clippy::all)]

pub mod evaluator;
pub mod parser;

pub use evaluator::{EvalError, EvalOutcome, apply_op, evaluate};
pub use parser::{ParseError, Rule, node_count, parse};

/// Parse one line of input and reduce it to a single outcome.
///
/// Syntactically valid input always produces exactly one outcome; invalid
/// input never reaches the evaluator.
pub fn eval_line(input: &str) -> Result<EvalOutcome, ParseError> {
    let program = parser::parse(input)?;
    Ok(evaluator::evaluate(program))
}
