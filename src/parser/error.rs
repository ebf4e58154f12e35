/// Why a single term could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// The count or constant is not an `i64`.
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    /// A dice count below one.
    #[error("Dice count must be at least 1, got {0}")]
    CountTooSmall(i64),

    /// The face designator is not `%`, `F` or a positive integer.
    #[error("Invalid face count: {0}")]
    FaceCount(String),

    /// Merging the term pushed a count or the constant past `i64`.
    #[error("Sum does not fit in 64 bits")]
    Overflow,
}

impl ParserError {
    /// Whether this failure discards the whole expression it came from.
    ///
    /// Only a dice count below one is tolerated: that term is skipped and the
    /// rest of the expression is still rolled.
    pub fn aborts_expression(&self) -> bool {
        !matches!(self, ParserError::CountTooSmall(_))
    }
}

/// Result of parsing a term.
pub type Result<T> = std::result::Result<T, ParserError>;
