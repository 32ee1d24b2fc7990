//! [`Extent`] of numeric values.

use itertools::{Itertools as _, MinMaxResult};
use serde::Serialize;

/// Bounds of a set of values, along with a slider step moving through them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Extent {
    /// Smallest value.
    pub min: f64,

    /// Largest value.
    pub max: f64,

    /// Slider step: a hundredth of the span, but at least `1`.
    pub step: f64,
}

impl Extent {
    /// Computes the [`Extent`] of the provided `values`, ignoring `NaN`s.
    ///
    /// [`None`] is returned if there are no comparable values.
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = match values
            .into_iter()
            .filter(|v| !v.is_nan())
            .minmax_by(f64::total_cmp)
        {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        Some(Self {
            min,
            max,
            step: ((max - min) / 100.0).max(1.0),
        })
    }
}

#[cfg(test)]
mod spec {
    use super::Extent;

    #[test]
    fn spans_values() {
        let extent = Extent::of([300.0, 50.0, 1050.0]).unwrap();

        assert_eq!(extent.min, 50.0);
        assert_eq!(extent.max, 1050.0);
        assert_eq!(extent.step, 10.0);
    }

    #[test]
    fn steps_at_least_by_one() {
        let extent = Extent::of([1.0, 4.0]).unwrap();

        assert_eq!(extent.step, 1.0);
        assert_eq!(Extent::of([7.0]).unwrap().step, 1.0);
    }

    #[test]
    fn empty_has_no_extent() {
        assert_eq!(Extent::of(Vec::new()), None);
        assert_eq!(Extent::of([f64::NAN]), None);
    }
}
