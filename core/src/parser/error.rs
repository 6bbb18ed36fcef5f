//! Parse errors produced by the grammar boundary.

use thiserror::Error;

use super::Rule;

/// Failure to turn a line of input into a grammar tree.
///
/// The evaluator is never invoked when parsing fails; this error is rendered
/// directly to the user instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input does not match the prefix-expression grammar. Carries
    /// pest's line/column diagnostic. Boxed: the pest error is large.
    #[error("{0}")]
    Syntax(Box<pest::error::Error<Rule>>),

    /// The grammar matched but yielded no `program` pair. Not reachable
    /// through the public grammar; kept so the wrapper never unwraps.
    #[error("parser produced no program node")]
    MissingRoot,
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Self::Syntax(Box::new(err))
    }
}
