//! Tree reduction: fold a grammar tree into a single outcome.

use pest::iterators::Pair;
use tracing::trace;

use super::EvalOutcome;
use super::error::EvalError;
use super::operators::apply_op;
use crate::parser::Rule;

/// Reduce a grammar tree to one outcome.
///
/// Number leaves parse as base-10 `i64`; a literal whose magnitude does not
/// fit is `InvalidNumber`. Composite nodes (`expr`, and the root `program`,
/// handled uniformly) read their operator child, evaluate their first
/// operand, and fold the remaining operands left to right through
/// [`apply_op`]. The operand scan stops at the first non-`expr` child, so
/// the program's trailing `EOI` pair is never evaluated.
///
/// Pure and terminating: recursion depth is bounded by the nesting depth of
/// the parsed line, and every failure is a returned value. A tree that does
/// not follow the grammar's shape reduces to `MalformedTree` rather than
/// panicking.
pub fn evaluate(pair: Pair<'_, Rule>) -> EvalOutcome {
    match pair.as_rule() {
        Rule::number => parse_number(pair.as_str()),
        Rule::expr | Rule::program => reduce(pair),
        // operator and EOI pairs are consumed by `reduce`, never evaluated
        _ => Err(EvalError::MalformedTree),
    }
}

fn parse_number(text: &str) -> EvalOutcome {
    // The grammar constrains leaf text to /-?[0-9]+/, so the only way this
    // parse fails is magnitude overflow.
    text.parse::<i64>().map_err(|_| EvalError::InvalidNumber)
}

fn reduce(pair: Pair<'_, Rule>) -> EvalOutcome {
    let mut children = pair.into_inner();

    let first = children.next().ok_or(EvalError::MalformedTree)?;

    // An expr wrapping a bare number carries that number as its only child.
    if first.as_rule() == Rule::number {
        return evaluate(first);
    }
    if first.as_rule() != Rule::operator {
        return Err(EvalError::MalformedTree);
    }
    let op = first.as_str();

    let head = children.next().ok_or(EvalError::MalformedTree)?;
    let mut acc = evaluate(head);

    for child in children {
        if child.as_rule() != Rule::expr {
            break;
        }
        acc = apply_op(acc, op, evaluate(child));
    }

    trace!(op, outcome = ?acc, "reduced expression");
    acc
}
