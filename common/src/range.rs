//! [`Range`]-related definitions.

use serde::Serialize;

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Range<T> {
    /// Lower bound, inclusive.
    min: T,

    /// Upper bound, inclusive.
    max: T,
}

impl<T: Copy + PartialOrd> Range<T> {
    /// Creates a new [`Range`] out of the provided bounds, swapping them if
    /// they are reversed.
    ///
    /// [`None`] is returned if the bounds are incomparable (like `NaN`).
    #[must_use]
    pub fn new(a: T, b: T) -> Option<Self> {
        match a.partial_cmp(&b)? {
            std::cmp::Ordering::Greater => Some(Self { min: b, max: a }),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal => {
                Some(Self { min: a, max: b })
            }
        }
    }

    /// Returns the lower bound of this [`Range`].
    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper bound of this [`Range`].
    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    /// Checks whether the provided `value` lies within this [`Range`],
    /// bounds included.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}
