use crate::DieKind;
use crate::parser::error::*;


/// One signed term of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// `count` dice of the same kind, e.g. `3d6`.
    Dice {
        /// Which die to throw.
        kind: DieKind,
        /// How many of them, at least 1.
        count: i64,
    },
    /// A signed number added to the total, e.g. `-2`.
    Constant(i64),
}


/// Parses a single term such as `3d6`, `d%`, `2dF` or `-4`.
///
/// The text in front of the first `d` (either case) is the dice count and
/// defaults to 1 when empty. The face designator runs up to the next `d`,
/// anything after it is ignored, so `2d6d8` reads as `2d6`. A term without a
/// `d` is a constant.
///
/// # Errors
/// - [`ParserError::Number`] if the count or constant is not an integer.
/// - [`ParserError::CountTooSmall`] if a dice count is below 1.
/// - [`ParserError::FaceCount`] if the part after `d` is neither `%`, `F`
///   nor an integer in `1..=i64::MAX`.
///
/// See [`ParserError::aborts_expression()`] for how each one is handled.
///
/// # Examples
/// ```
/// use dice::{parse_term, DieKind, Term, ParserError};
///
/// assert_eq!(parse_term("3d6"), Ok(Term::Dice { kind: DieKind::Standard(6), count: 3 }));
/// assert_eq!(parse_term("D%"), Ok(Term::Dice { kind: DieKind::Percentile, count: 1 }));
/// assert_eq!(parse_term("-4"), Ok(Term::Constant(-4)));
/// assert_eq!(parse_term("-1d6"), Err(ParserError::CountTooSmall(-1)));
/// assert_eq!(parse_term("2d6d8"), Ok(Term::Dice { kind: DieKind::Standard(6), count: 2 }));
/// assert!(matches!(parse_term("d0"), Err(ParserError::FaceCount(_))));
/// ```
pub fn parse_term(input: &str) -> Result<Term> {
    let term = input.to_ascii_uppercase();

    let mut parts = term.split('D');
    let count = parts.next().unwrap_or_default();

    let Some(faces) = parts.next() else {
        return Ok(Term::Constant(count.parse()?));
    };

    let count: i64 = match count {
        "" => 1,
        count => count.parse()?,
    };

    if count < 1 {
        return Err(ParserError::CountTooSmall(count));
    }

    Ok(Term::Dice { kind: parse_faces(faces)?, count })
}

fn parse_faces(faces: &str) -> Result<DieKind> {
    match faces {
        "%" => Ok(DieKind::Percentile),
        "F" => Ok(DieKind::Fudge),
        faces => match faces.parse::<i64>() {
            Ok(n) if n >= 1 => Ok(DieKind::Standard(n.unsigned_abs())),
            _ => Err(ParserError::FaceCount(faces.into())),
        },
    }
}
