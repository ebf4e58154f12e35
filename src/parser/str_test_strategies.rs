use proptest::prelude::*;


pub(crate) fn simple_number_strategy() -> impl Strategy<Value = String> {
    (0i64..=1000).prop_map(|n| n.to_string())
}

pub(crate) fn simple_dice_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(1u32..=20),
        prop_oneof!["d", "D"],
        1u32..=100
    ).prop_map(|(count, marker, size)| match count {
        Some(count) => format!("{count}{marker}{size}"),
        None => format!("{marker}{size}")
    })
}

pub(crate) fn special_dice_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(1u32..=20),
        prop_oneof!["d", "D"],
        prop_oneof![Just("%"), Just("F"), Just("f")]
    ).prop_map(|(count, marker, face)| match count {
        Some(count) => format!("{count}{marker}{face}"),
        None => format!("{marker}{face}")
    })
}

/// A single term without any sign.
pub(crate) fn simple_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        simple_number_strategy(),
        simple_dice_strategy(),
        special_dice_strategy(),
    ]
}

/// An expression of up to eight terms joined by `+` or `-`.
///
/// A `-` in front of a dice term without a count (`-d6`) makes the whole
/// expression invalid, so not every generated expression parses.
pub(crate) fn expression_strategy() -> impl Strategy<Value = String> {
    (
        simple_term_strategy(),
        prop::collection::vec((prop_oneof![Just("+"), Just("-")], simple_term_strategy()), 0..8)
    ).prop_map(|(first, rest)| {
        rest.into_iter().fold(first, |mut expr, (op, term)| {
            expr.push_str(op);
            expr.push_str(&term);
            expr
        })
    })
}
