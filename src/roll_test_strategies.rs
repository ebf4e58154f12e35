use proptest::prelude::*;
use crate::roll::{DieKind, Throw};


pub(crate) fn die_kind_strategy() -> impl Strategy<Value = DieKind> {
    prop_oneof![
        (1u64..=100).prop_map(DieKind::Standard),
        Just(DieKind::Percentile),
        Just(DieKind::Fudge),
        Just(DieKind::Constant),
    ]
}

/// A throw whose number is one the roller could have produced for its kind.
pub(crate) fn throw_strategy() -> impl Strategy<Value = Throw> {
    die_kind_strategy().prop_flat_map(|kind| {
        let number = match kind {
            DieKind::Standard(faces) => (1..=faces as i64).boxed(),
            DieKind::Percentile => (0..10i64).prop_map(|n| n * 10).boxed(),
            DieKind::Fudge => (1..=6i64).boxed(),
            DieKind::Constant => (-1000..=1000i64).boxed(),
        };

        number.prop_map(move |number| Throw::new(kind, number))
    })
}

pub(crate) fn throws_strategy() -> impl Strategy<Value = Vec<Throw>> {
    prop::collection::vec(throw_strategy(), 0..30)
}
