//! pest wrapper for the prefix-expression grammar.
//!
//! The grammar tree handed to the evaluator is `pest::iterators::Pair`:
//! `as_rule()` is the node's category tag, `as_str()` its raw text, and
//! `into_inner()` its ordered children.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::trace;

use super::error::ParseError;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct ExpressionParser;

/// Parse one line of input into its `program` pair.
///
/// The returned pair spans the whole input: the grammar anchors the program
/// rule at both ends, so trailing garbage is a parse error rather than a
/// silently truncated tree.
pub fn parse(input: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs = ExpressionParser::parse(Rule::program, input)?;
    let program = pairs.next().ok_or(ParseError::MissingRoot)?;
    trace!(
        len = input.len(),
        nodes = node_count(&program),
        "parsed program"
    );
    Ok(program)
}

/// Number of nodes in a parsed tree, the root included.
pub fn node_count(pair: &Pair<'_, Rule>) -> usize {
    1 + pair
        .clone()
        .into_inner()
        .map(|child| node_count(&child))
        .sum::<usize>()
}
