//! [`Command`] for restricting a [`Numeric`] dimension.

use common::Range;
use tracerr::Traced;
use tracing as log;

use crate::{domain::filter::Numeric, infra::Views, Service};

use super::{Change, Command, ExecutionError};

/// [`Command`] restricting a [`Numeric`] dimension to a [`Range`], or lifting
/// the restriction.
#[derive(Clone, Copy, Debug)]
pub struct SetRange {
    /// [`Numeric`] dimension to restrict.
    pub dimension: Numeric,

    /// [`Range`] to restrict the dimension to, if any.
    pub range: Option<Range<f64>>,
}

impl SetRange {
    /// Creates a new [`SetRange`] [`Command`].
    #[must_use]
    pub fn new(dimension: Numeric, range: Option<Range<f64>>) -> Self {
        Self { dimension, range }
    }

    /// Creates a new [`SetRange`] [`Command`] restricting the `dimension` to
    /// `[min, max]`.
    ///
    /// Reversed bounds are swapped, while `NaN` ones lift the restriction.
    #[must_use]
    pub fn between(dimension: Numeric, min: f64, max: f64) -> Self {
        Self::new(dimension, Range::new(min, max))
    }

    /// Creates a new [`SetRange`] [`Command`] lifting the restriction of the
    /// `dimension`.
    #[must_use]
    pub fn clear(dimension: Numeric) -> Self {
        Self::new(dimension, None)
    }
}

impl<V: Views> Command<SetRange> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: SetRange) -> Result<Self::Ok, Self::Err> {
        let SetRange { dimension, range } = cmd;

        let changed = self.state.set_range(dimension, range);
        if changed {
            log::debug!("`{dimension}` range set to {range:?}");
        }

        self.refresh(Change::Subset.or_unchanged(changed))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}
