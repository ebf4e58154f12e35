use std::fmt::Display;
use log::debug;
use crate::DieKind;
use crate::parser::{split_terms, parse_term, ParserError, Term};
use crate::parser::error::Result;


/// Every die kind and constant of one expression, with how often each occurs.
///
/// Entries keep the order in which their kind first appeared. Dice of the
/// same kind are merged by adding their counts, and all constants collapse
/// into a single [`DieKind::Constant`] entry whose count is their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrowGroup {
    entries: Vec<(DieKind, i64)>,
}

impl ThrowGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a parsed term into the group.
    ///
    /// # Errors
    /// Returns [`ParserError::Overflow`] and leaves the group unchanged if the
    /// merged count or constant does not fit in an `i64`.
    ///
    /// # Examples
    /// ```
    /// use dice::{DieKind, ParserError, Term, ThrowGroup};
    ///
    /// let mut group = ThrowGroup::new();
    /// group.add(Term::Dice { kind: DieKind::Standard(6), count: 3 })?;
    /// group.add(Term::Constant(1))?;
    /// group.add(Term::Dice { kind: DieKind::Standard(6), count: 2 })?;
    /// group.add(Term::Constant(-2))?;
    ///
    /// assert_eq!(group.count(DieKind::Standard(6)), Some(5));
    /// assert_eq!(group.constant(), Some(-1));
    /// assert_eq!(group.to_string(), "5d6-1");
    ///
    /// assert_eq!(group.add(Term::Constant(i64::MAX)), Err(ParserError::Overflow));
    /// assert_eq!(group.constant(), Some(-1));
    /// # Ok::<(), ParserError>(())
    /// ```
    pub fn add(&mut self, term: Term) -> Result<()> {
        let (kind, count) = match term {
            Term::Dice { kind, count } => (kind, count),
            Term::Constant(value) => (DieKind::Constant, value),
        };

        match self.entries.iter_mut().find(|(existing, _)| *existing == kind) {
            Some((_, total)) => *total = total.checked_add(count).ok_or(ParserError::Overflow)?,
            None => self.entries.push((kind, count)),
        }

        Ok(())
    }

    /// The merged count for `kind`, if it occurs in the group.
    pub fn count(&self, kind: DieKind) -> Option<i64> {
        self.entries.iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, count)| *count)
    }

    /// The sum of all constants, if the expression had any.
    pub fn constant(&self) -> Option<i64> {
        self.count(DieKind::Constant)
    }

    /// Number of outcomes a roll of this group produces: one per die plus one
    /// for the constant entry.
    pub fn columns(&self) -> usize {
        self.entries.iter()
            .map(|(kind, count)| if kind.is_constant() { 1 } else { usize::try_from(*count).unwrap_or(usize::MAX) })
            .fold(0, usize::saturating_add)
    }

    /// Whether the group has no entries left.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(kind, count)` entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (DieKind, i64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Display for ThrowGroup {
    /// Formats the group in compact notation, e.g. `5d6+1d%-3`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (kind, count)) in self.iter().enumerate() {
            match (i, kind.is_constant()) {
                (0, true) => write!(f, "{count}")?,
                (_, true) if count < 0 => write!(f, "{count}")?,
                (_, true) => write!(f, "+{count}")?,
                (0, false) => write!(f, "{count}{kind}")?,
                (_, false) => write!(f, "+{count}{kind}")?,
            }
        }

        Ok(())
    }
}


/// An invalid term, reported against the expression it appeared in.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// The raw expression, as given on the command line.
    pub expression: String,
    /// Why the term was rejected.
    pub error: ParserError,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid dice entry: {}", self.expression)
    }
}


/// The outcome of parsing every expression of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    /// One group per expression that kept at least one term, in input order.
    pub groups: Vec<ThrowGroup>,
    /// The widest group's [`ThrowGroup::columns()`], used to align totals.
    pub column_count: usize,
    /// Every rejected term, in the order it was found.
    pub rejections: Vec<Rejection>,
}


/// Parses one expression into a [`ThrowGroup`].
///
/// Terms with a dice count below one are skipped and recorded in
/// `rejections`. Any other invalid term, or one whose merge overflows,
/// records a rejection and discards the whole expression, returning `None`.
pub(crate) fn parse_expression(input: &str, rejections: &mut Vec<Rejection>) -> Option<ThrowGroup> {
    let mut group = ThrowGroup::new();

    for term in split_terms(input).into_iter().filter(|term| !term.is_empty()) {
        match parse_term(term).and_then(|parsed| group.add(parsed)) {
            Ok(()) => {}
            Err(error) => {
                debug!("rejected term {term:?} of {input:?}: {error}");
                let aborts = error.aborts_expression();

                rejections.push(Rejection { expression: input.into(), error });

                if aborts {
                    return None;
                }
            }
        }
    }

    Some(group)
}


/// Parses every expression, dropping the ones that end up empty or invalid.
///
/// # Examples
/// ```
/// use dice::{parse_args, DieKind};
///
/// let parsed = parse_args(["3d6+2d6", "d6+1+2", "d0", "Hd2"]);
///
/// assert_eq!(parsed.groups.len(), 2);
/// assert_eq!(parsed.groups[0].count(DieKind::Standard(6)), Some(5));
/// assert_eq!(parsed.groups[1].constant(), Some(3));
/// assert_eq!(parsed.column_count, 5);
/// assert_eq!(parsed.rejections.len(), 2);
/// assert_eq!(parsed.rejections[0].to_string(), "invalid dice entry: d0");
/// ```
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedArgs::default();

    for arg in args {
        let Some(group) = parse_expression(arg.as_ref(), &mut parsed.rejections) else {
            continue;
        };

        parsed.column_count = parsed.column_count.max(group.columns());

        if !group.is_empty() {
            debug!("parsed {:?} as {group}", arg.as_ref());
            parsed.groups.push(group);
        }
    }

    parsed
}
