//! [`ParallelCoordinates`] payload definitions.

use serde::Serialize;

use crate::{
    domain::{filter::Numeric, listing::Priced},
    stats::Extent,
};

/// Payload of the parallel-coordinates view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParallelCoordinates {
    /// Listings passing every active filter.
    pub listings: Vec<Priced>,

    /// Fixed [`Axes`] the listings are drawn over.
    pub axes: Axes,
}

/// [`Extent`]s of the parallel-coordinates axes, computed over the whole
/// priced dataset so that axes stay still while rows are filtered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Axes {
    /// [`Numeric::Area`] axis.
    pub area: Option<Extent>,

    /// [`Numeric::Rooms`] axis.
    pub rooms: Option<Extent>,

    /// [`Numeric::Bathrooms`] axis.
    pub bathrooms: Option<Extent>,

    /// [`Numeric::Price`] axis.
    pub price: Option<Extent>,
}

impl Axes {
    /// Computes the [`Axes`] of the provided `listings`.
    #[must_use]
    pub fn of(listings: &[Priced]) -> Self {
        let extent =
            |dim| Extent::of(listings.iter().map(|l| l.value(dim)));
        Self {
            area: extent(Numeric::Area),
            rooms: extent(Numeric::Rooms),
            bathrooms: extent(Numeric::Bathrooms),
            price: extent(Numeric::Price),
        }
    }

    /// Returns the [`Extent`] of the provided [`Numeric`] axis, if any.
    #[must_use]
    pub fn get(&self, dimension: Numeric) -> Option<Extent> {
        match dimension {
            Numeric::Area => self.area,
            Numeric::Rooms => self.rooms,
            Numeric::Bathrooms => self.bathrooms,
            Numeric::Price => self.price,
        }
    }
}
