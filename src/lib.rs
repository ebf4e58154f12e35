#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
//! Parse dice notation such as `2d6+1d10`, `d%`, `3dF` or `8-4`, roll it with
//! a cryptographically secure source and lay the results out in a table.


#[cfg(test)]
mod roll_test_strategies;

mod error;
mod roll;
mod parser;
mod report;
mod sort;
mod source;

pub use error::Error;
pub use roll::{DieKind, Throw, Roller, total};
pub use parser::{
    ParserError,
    Term, ThrowGroup, Rejection, ParsedArgs,
    parse_term, parse_args
};
pub use report::Report;
pub use sort::{display_order, sort_throws};
pub use source::{RandomSource, OsSource, SequenceSource};
