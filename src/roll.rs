use std::fmt::Display;
use log::debug;
use crate::{Error, RandomSource, ThrowGroup};


/// The kind of a die, or a constant that is added without rolling.
///
/// Two terms with the same `DieKind` are interchangeable, which is what lets
/// a [`ThrowGroup`] merge `3d6+2d6` into a single `5d6` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DieKind {
    /// A regular die with faces numbered `1..=n`.
    Standard(u64),
    /// A percentile die (`d%`): a d10 read as `00, 10, ..., 90`.
    Percentile,
    /// A fudge die (`dF`): a d6 read as `-1` (1, 2), `0` (3, 4) or `+1` (5, 6).
    Fudge,
    /// A fixed value, never rolled.
    Constant,
}

impl DieKind {
    /// Number of faces the die is rolled with, `0` for constants.
    ///
    /// # Examples
    /// ```
    /// use dice::DieKind;
    ///
    /// assert_eq!(DieKind::Standard(20).face_count(), 20);
    /// assert_eq!(DieKind::Percentile.face_count(), 10);
    /// assert_eq!(DieKind::Fudge.face_count(), 6);
    /// assert_eq!(DieKind::Constant.face_count(), 0);
    /// ```
    pub const fn face_count(&self) -> u64 {
        match self {
            DieKind::Standard(faces) => *faces,
            DieKind::Percentile => 10,
            DieKind::Fudge => 6,
            DieKind::Constant => 0,
        }
    }

    /// Whether this is a `d%`.
    pub const fn is_percentile(&self) -> bool {
        matches!(self, DieKind::Percentile)
    }

    /// Whether this is a `dF`.
    pub const fn is_fudge(&self) -> bool {
        matches!(self, DieKind::Fudge)
    }

    /// Whether this is the constant entry.
    pub const fn is_constant(&self) -> bool {
        matches!(self, DieKind::Constant)
    }

    /// Turns a draw in `[0, face_count)` into the number shown on the die.
    ///
    /// Fudge dice keep their raw `1..=6` face here, see [`Throw::value()`].
    fn normalize(&self, draw: u64) -> i64 {
        let draw = i64::try_from(draw).unwrap_or(i64::MAX);

        match self {
            DieKind::Percentile => draw * 10,
            _ => draw.saturating_add(1),
        }
    }
}

impl Display for DieKind {
    /// Formats the die as it appears in a result table: `d6`, `d%` or `dF`.
    /// Constants have no die label and format as an empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieKind::Standard(faces) => write!(f, "d{faces}"),
            DieKind::Percentile => write!(f, "d%"),
            DieKind::Fudge => write!(f, "dF"),
            DieKind::Constant => Ok(()),
        }
    }
}


/// One resolved outcome: a die with the number it landed on, or a constant
/// with its accumulated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throw {
    /// What was thrown.
    pub kind: DieKind,
    /// The raw result: `1..=n` for standard and fudge dice, `0..=90` in
    /// steps of ten for percentile dice, the value itself for constants.
    pub number: i64,
}

impl Throw {
    /// A throw of `kind` that came up `number`.
    pub fn new(kind: DieKind, number: i64) -> Self {
        Self { kind, number }
    }

    /// Shorthand for a [`DieKind::Constant`] throw.
    pub fn constant(value: i64) -> Self {
        Self::new(DieKind::Constant, value)
    }

    /// The amount this throw adds to a total.
    ///
    /// # Examples
    /// ```
    /// use dice::{DieKind, Throw};
    ///
    /// assert_eq!(Throw::new(DieKind::Standard(6), 4).value(), 4);
    /// assert_eq!(Throw::new(DieKind::Percentile, 70).value(), 70);
    /// assert_eq!(Throw::new(DieKind::Fudge, 2).value(), -1);
    /// assert_eq!(Throw::new(DieKind::Fudge, 4).value(), 0);
    /// assert_eq!(Throw::new(DieKind::Fudge, 5).value(), 1);
    /// assert_eq!(Throw::constant(-3).value(), -3);
    /// ```
    pub fn value(&self) -> i64 {
        match (self.kind, self.number) {
            (DieKind::Fudge, 1 | 2) => -1,
            (DieKind::Fudge, 3 | 4) => 0,
            (DieKind::Fudge, _) => 1,
            (_, number) => number,
        }
    }

    /// The value as printed inside a die cell.
    ///
    /// Percentile zero reads `00`, fudge dice print their semantic value.
    pub fn display_value(&self) -> String {
        match self.kind {
            DieKind::Percentile if self.number == 0 => "00".into(),
            _ => self.value().to_string(),
        }
    }
}


/// Sum of the semantic values of `throws`, saturating at the `i64` bounds.
///
/// # Examples
/// ```
/// use dice::{total, DieKind, Throw};
///
/// let throws = [
///     Throw::new(DieKind::Standard(6), 5),
///     Throw::new(DieKind::Fudge, 6),
///     Throw::new(DieKind::Percentile, 0),
///     Throw::constant(-2),
/// ];
/// assert_eq!(total(&throws), 4); // 5 + 1 + 0 - 2
/// ```
pub fn total(throws: &[Throw]) -> i64 {
    throws.iter().map(Throw::value).fold(0, i64::saturating_add)
}


/// Rolls [`ThrowGroup`]s with an injected [`RandomSource`].
///
/// # Examples
/// ```
/// use dice::{parse_args, DieKind, Roller, SequenceSource, Throw};
///
/// let parsed = parse_args(["2d6+1"]);
/// let mut roller = Roller::new(SequenceSource::new([3, 0]));
///
/// let throws = roller.roll(&parsed.groups[0]).unwrap();
/// assert_eq!(throws, vec![
///     Throw::new(DieKind::Standard(6), 4),
///     Throw::new(DieKind::Standard(6), 1),
///     Throw::constant(1),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Roller<R> {
    source: R,
}

impl<R: RandomSource> Roller<R> {
    /// Creates a roller drawing from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Rolls every die of `group` and materializes its constant.
    ///
    /// Throws come out in the group's entry order, one per die. The order is
    /// not meant for display, see [`crate::sort_throws()`].
    ///
    /// # Errors
    /// Returns the first error raised by the random source. No throws are
    /// returned in that case.
    pub fn roll(&mut self, group: &ThrowGroup) -> Result<Vec<Throw>, Error> {
        let mut throws = Vec::new();

        for (kind, count) in group.iter() {
            if kind.is_constant() {
                throws.push(Throw::constant(count));
                continue;
            }

            for _ in 0..count {
                let draw = self.source.draw(kind.face_count())?;
                throws.push(Throw::new(kind, kind.normalize(draw)));
            }
        }

        debug!("rolled {group}: {throws:?}");
        Ok(throws)
    }

    /// Gives back the random source.
    pub fn into_source(self) -> R {
        self.source
    }
}


#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;
    use crate::{parse_args, SequenceSource};
    use crate::roll_test_strategies::*;


    fn roll_one(expression: &str, draws: &[u64]) -> Result<Vec<Throw>, Error> {
        let parsed = parse_args([expression]);
        let mut roller = Roller::new(SequenceSource::new(draws.to_vec()));
        roller.roll(&parsed.groups[0])
    }

    proptest! {
        #[test]
        fn test_standard_normalization(faces in 1u64..=100, draw in 0u64..100) {
            let draw = draw % faces;
            let throw = Throw::new(DieKind::Standard(faces), DieKind::Standard(faces).normalize(draw));

            prop_assert_eq!(throw.number, draw as i64 + 1);
            prop_assert!((1..=faces as i64).contains(&throw.value()));
        }

        #[test]
        fn test_percentile_normalization(draw in 0u64..10) {
            let number = DieKind::Percentile.normalize(draw);

            prop_assert_eq!(number, draw as i64 * 10);
            prop_assert_eq!(number % 10, 0);
        }

        #[test]
        fn test_value_in_range(throw in throw_strategy()) {
            let value = throw.value();

            match throw.kind {
                DieKind::Standard(faces) => prop_assert!((1..=faces as i64).contains(&value)),
                DieKind::Percentile => prop_assert!((0..=90).contains(&value)),
                DieKind::Fudge => prop_assert!((-1..=1).contains(&value)),
                DieKind::Constant => prop_assert_eq!(value, throw.number),
            }
        }

        #[test]
        fn test_total_is_sum_of_values(throws in throws_strategy()) {
            let expected: i64 = throws.iter().map(|throw| throw.value()).sum();
            prop_assert_eq!(total(&throws), expected);
        }

        #[test]
        fn test_roll_materializes_every_die(count in 1u64..=20, faces in 1u64..=20) {
            let expression = format!("{count}d{faces}");
            let draws: Vec<u64> = (0..count).map(|i| i % faces).collect();

            let throws = roll_one(&expression, &draws).unwrap();

            prop_assert_eq!(throws.len(), count as usize);
            for (throw, draw) in throws.iter().zip(&draws) {
                prop_assert_eq!(throw.kind, DieKind::Standard(faces));
                prop_assert_eq!(throw.number, *draw as i64 + 1);
            }
        }
    }

    #[test]
    fn test_display_die_kind() {
        assert_eq!(DieKind::Standard(6).to_string(), "d6");
        assert_eq!(DieKind::Standard(100).to_string(), "d100");
        assert_eq!(DieKind::Percentile.to_string(), "d%");
        assert_eq!(DieKind::Fudge.to_string(), "dF");
        assert_eq!(DieKind::Constant.to_string(), "");
    }

    #[test]
    fn test_percentile_display() {
        assert_eq!(Throw::new(DieKind::Percentile, 0).display_value(), "00");
        assert_eq!(Throw::new(DieKind::Percentile, 90).display_value(), "90");
        assert_eq!(Throw::constant(0).display_value(), "0");
    }

    #[test]
    fn test_fudge_remap() {
        let shown: Vec<String> = (1..=6)
            .map(|number| Throw::new(DieKind::Fudge, number).display_value())
            .collect();

        assert_eq!(shown, ["-1", "-1", "0", "0", "1", "1"]);

        let throws: Vec<Throw> = (1..=6).map(|number| Throw::new(DieKind::Fudge, number)).collect();
        assert_eq!(total(&throws), 0);
    }

    #[test]
    fn test_roll_percentile_and_fudge() {
        let err = roll_one("d%+dF", &[0, 9, 5]).unwrap_err();
        assert_eq!(err, Error::OutOfRange { value: 9, bound: 6 });

        let throws = roll_one("d%+dF", &[0, 5]).unwrap();
        assert_eq!(throws, vec![
            Throw::new(DieKind::Percentile, 0),
            Throw::new(DieKind::Fudge, 6),
        ]);
        assert_eq!(total(&throws), 1);
    }

    #[test]
    fn test_roll_constant_is_not_drawn() {
        let mut roller = Roller::new(SequenceSource::default());
        let parsed = parse_args(["8-4"]);

        let throws = roller.roll(&parsed.groups[0]).unwrap();

        assert_eq!(throws, vec![Throw::constant(4)]);
        assert_eq!(roller.into_source().remaining(), 0);
    }

    #[test]
    fn test_total_saturates() {
        assert_eq!(total(&[Throw::constant(i64::MAX), Throw::new(DieKind::Standard(6), 6)]), i64::MAX);
        assert_eq!(total(&[Throw::constant(i64::MIN), Throw::new(DieKind::Fudge, 1)]), i64::MIN);
    }

    #[test]
    fn test_normalize_large_faces() {
        let faces = i64::MAX.unsigned_abs();
        assert_eq!(DieKind::Standard(faces).normalize(faces - 1), i64::MAX);
        assert_eq!(DieKind::Standard(u64::MAX).normalize(u64::MAX - 1), i64::MAX);
    }

    #[test]
    fn test_roll_source_failure() {
        assert_eq!(roll_one("3d6", &[1, 2]), Err(Error::Exhausted));
    }
}
