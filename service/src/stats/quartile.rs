//! Quartile statistics.

use std::cmp::Ordering;

use common::define_kind;
use serde::{Deserialize, Serialize};

/// Quartile breakpoints `[Q1, Q2, Q3, Q4]` of a set of values.
///
/// Always non-decreasing, with `Q4` being the maximum.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(into = "[f64; 4]", try_from = "[f64; 4]")]
pub struct Quartiles([f64; 4]);

impl Quartiles {
    /// Computes [`Quartiles`] of the provided `values`.
    ///
    /// [`None`] is returned if there are no comparable values.
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        sorted.sort_unstable_by(f64::total_cmp);

        Some(Self([
            percentile(&sorted, 25.0)?,
            percentile(&sorted, 50.0)?,
            percentile(&sorted, 75.0)?,
            percentile(&sorted, 100.0)?,
        ]))
    }

    /// Creates new [`Quartiles`] out of precomputed breakpoints, if they are
    /// non-decreasing.
    #[must_use]
    pub fn new(breakpoints: [f64; 4]) -> Option<Self> {
        breakpoints
            .windows(2)
            .all(|w| w[0].partial_cmp(&w[1]).is_some_and(Ordering::is_le))
            .then_some(Self(breakpoints))
    }

    /// Returns these [`Quartiles`] as `[Q1, Q2, Q3, Q4]`.
    #[must_use]
    pub fn get(&self) -> [f64; 4] {
        self.0
    }

    /// Classifies the provided `value` into its quartile [`Bucket`].
    ///
    /// Values equal to a breakpoint belong to the lower [`Bucket`].
    #[must_use]
    pub fn classify(&self, value: f64) -> Bucket {
        let [q1, q2, q3, _] = self.0;
        if value <= q1 {
            Bucket::Q1
        } else if value <= q2 {
            Bucket::Q2
        } else if value <= q3 {
            Bucket::Q3
        } else {
            Bucket::Q4
        }
    }
}

impl TryFrom<[f64; 4]> for Quartiles {
    type Error = &'static str;

    fn try_from(breakpoints: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(breakpoints).ok_or("quartile breakpoints must be ascending")
    }
}

impl From<Quartiles> for [f64; 4] {
    fn from(quartiles: Quartiles) -> Self {
        quartiles.0
    }
}

define_kind! {
    #[doc = "Quartile bucket a value is classified into."]
    enum Bucket {
        #[doc = "Up to the first quartile."]
        Q1,

        #[doc = "Above the first quartile, up to the median."]
        Q2,

        #[doc = "Above the median, up to the third quartile."]
        Q3,

        #[doc = "Above the third quartile."]
        Q4,
    }
}

/// Computes the `p`th percentile of the provided ascending `sorted` values,
/// linearly interpolating between the neighbouring ranks.
///
/// [`None`] is returned if there are no values.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;

    #[expect(clippy::cast_precision_loss, reason = "dataset is small")]
    let index = (p / 100.0).clamp(0.0, 1.0) * last as f64;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "index is non-negative and within `sorted` bounds"
    )]
    let (lower, upper) = (index.floor() as usize, index.ceil() as usize);

    let (low, high) = (sorted[lower], sorted[upper.min(last)]);
    if lower == upper {
        return Some(low);
    }
    // Rounding must never lift the result above the upper neighbour.
    Some((low + (high - low) * index.fract()).min(high))
}

/// Computes [`Quartiles`] of the provided `values`.
#[must_use]
pub fn quartiles(values: &[f64]) -> Option<Quartiles> {
    Quartiles::of(values.iter().copied())
}

/// Classifies the provided `value` against the given [`Quartiles`].
#[must_use]
pub fn classify(value: f64, quartiles: &Quartiles) -> Bucket {
    quartiles.classify(value)
}
