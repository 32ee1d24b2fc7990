//! [`View`]-related implementations.

#[cfg(any(test, feature = "memory"))]
pub mod memory;

use common::{
    define_kind,
    operations::{Draw, Highlight},
};
use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::read::{Choropleth, ParallelCoordinates, Selection, ViolinPlot};

#[cfg(any(test, feature = "memory"))]
pub use self::memory::Memory;

/// View operation.
pub use common::Handler as View;

/// Every [`View`] operation the dashboard notifies about its changes.
pub trait Views:
    View<Draw<ParallelCoordinates>, Ok = (), Err = Traced<Error>>
    + View<Draw<ViolinPlot>, Ok = (), Err = Traced<Error>>
    + View<Draw<Choropleth>, Ok = (), Err = Traced<Error>>
    + View<Highlight<Selection>, Ok = (), Err = Traced<Error>>
{
}

impl<T> Views for T where
    T: View<Draw<ParallelCoordinates>, Ok = (), Err = Traced<Error>>
        + View<Draw<ViolinPlot>, Ok = (), Err = Traced<Error>>
        + View<Draw<Choropleth>, Ok = (), Err = Traced<Error>>
        + View<Highlight<Selection>, Ok = (), Err = Traced<Error>>
{
}

/// [`View`] error.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// [`View`] failed to render its payload.
    #[display("`{view}` view failed to render: {reason}")]
    Render {
        /// [`Kind`] of the failed [`View`].
        view: Kind,

        /// Reason of the failure.
        reason: String,
    },
}

define_kind! {
    #[doc = "Kind of a [`View`]."]
    enum Kind {
        #[doc = "Parallel-coordinates chart."]
        ParallelCoordinates,

        #[doc = "Violin plot of prices."]
        ViolinPlot,

        #[doc = "Choropleth map of districts."]
        Choropleth,

        #[doc = "District selection highlight over the choropleth."]
        Selection,
    }
}
