pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{ExpressionParser, Rule, node_count, parse};
