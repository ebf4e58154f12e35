use std::collections::VecDeque;
use rand::{rngs::OsRng, TryRngCore};
use crate::Error;


/// A supplier of uniformly distributed integers.
///
/// The [`crate::Roller`] asks for one value per die. Implementations either
/// return a value in `[0, bound)` or an [`Error`], which ends the roll.
pub trait RandomSource {
    /// Draws an integer uniformly distributed in `[0, bound)`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRange`] if `bound` is zero, or any error the
    /// underlying source reports.
    fn draw(&mut self, bound: u64) -> Result<u64, Error>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn draw(&mut self, bound: u64) -> Result<u64, Error> {
        (**self).draw(bound)
    }
}


/// Draws from the operating system's cryptographically secure generator.
///
/// Each call is an independent request to the OS. Values are produced with
/// rejection sampling so every result in `[0, bound)` is equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl RandomSource for OsSource {
    fn draw(&mut self, bound: u64) -> Result<u64, Error> {
        if bound == 0 {
            return Err(Error::EmptyRange);
        }

        // largest multiple of `bound` that fits, values at or above it are biased
        let zone = u64::MAX - u64::MAX % bound;

        loop {
            let value = OsRng
                .try_next_u64()
                .map_err(|err| Error::RandomSource(err.to_string()))?;

            if value < zone {
                return Ok(value % bound);
            }
        }
    }
}


/// Replays a fixed sequence of values, for reproducible rolls.
///
/// Running out of values or replaying a value outside the requested range
/// is reported as an error, the same way a failing OS source would be.
///
/// # Examples
/// ```
/// use dice::{RandomSource, SequenceSource, Error};
///
/// let mut source = SequenceSource::new([3, 0]);
/// assert_eq!(source.draw(6), Ok(3));
/// assert_eq!(source.draw(10), Ok(0));
/// assert_eq!(source.draw(6), Err(Error::Exhausted));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSource {
    values: VecDeque<u64>,
}

impl SequenceSource {
    /// Creates a source that returns `values` in order.
    pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Self {
        Self { values: values.into_iter().collect() }
    }

    /// Number of values not drawn yet.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceSource {
    fn draw(&mut self, bound: u64) -> Result<u64, Error> {
        if bound == 0 {
            return Err(Error::EmptyRange);
        }

        let value = self.values.pop_front().ok_or(Error::Exhausted)?;

        if value >= bound {
            return Err(Error::OutOfRange { value, bound });
        }

        Ok(value)
    }
}
