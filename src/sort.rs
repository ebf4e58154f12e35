use std::cmp::Ordering;
use crate::Throw;


/// The order in which throws are displayed.
///
/// Dice come before the constant. Dice with more faces come first; between
/// dice with the same face count a percentile die leads and a fudge die
/// trails a standard one, and equal kinds show the higher number first.
/// Constants are ordered by ascending value.
pub fn display_order(a: &Throw, b: &Throw) -> Ordering {
    match (a.kind.is_constant(), b.kind.is_constant()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.number.cmp(&b.number),
        (false, false) => b.kind.face_count().cmp(&a.kind.face_count())
            .then_with(|| b.kind.is_percentile().cmp(&a.kind.is_percentile()))
            .then_with(|| a.kind.is_fudge().cmp(&b.kind.is_fudge()))
            .then_with(|| b.number.cmp(&a.number)),
    }
}

/// Sorts throws into [`display_order`].
///
/// The result depends only on the throws themselves, never on the order they
/// were rolled in.
///
/// # Examples
/// ```
/// use dice::{sort_throws, DieKind, Throw};
///
/// let mut throws = vec![
///     Throw::constant(2),
///     Throw::new(DieKind::Standard(6), 3),
///     Throw::new(DieKind::Standard(10), 7),
///     Throw::new(DieKind::Percentile, 40),
/// ];
/// sort_throws(&mut throws);
///
/// assert_eq!(throws, vec![
///     Throw::new(DieKind::Percentile, 40),
///     Throw::new(DieKind::Standard(10), 7),
///     Throw::new(DieKind::Standard(6), 3),
///     Throw::constant(2),
/// ]);
/// ```
pub fn sort_throws(throws: &mut [Throw]) {
    throws.sort_by(display_order);
}
