mod error;
mod lexer;
mod parse;
mod group;

#[cfg(test)]
mod str_test_strategies;

pub use error::ParserError;
pub(crate) use lexer::split_terms;
pub use parse::{Term, parse_term};
pub use group::{ThrowGroup, Rejection, ParsedArgs, parse_args};
