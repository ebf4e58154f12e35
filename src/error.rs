/// Failures that stop a roll.
///
/// Every variant is fatal: there is no retry and no partial result, a roll
/// either uses a complete set of good draws or does not happen at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operating system generator failed.
    #[error("Random source failed: {0}")]
    RandomSource(String),

    /// A replaying source ran out of values.
    #[error("Random source exhausted")]
    Exhausted,

    /// A replaying source produced a value outside the requested range.
    #[error("Drawn value {value} is outside of [0, {bound})")]
    OutOfRange {
        /// The value the source produced.
        value: u64,
        /// The exclusive upper bound that was requested.
        bound: u64,
    },

    /// A draw was requested with a bound of zero.
    #[error("Cannot draw from an empty range")]
    EmptyRange,
}
