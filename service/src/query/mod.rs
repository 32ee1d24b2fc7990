//! [`Query`] definition.

pub mod data;
pub mod district;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Query;

pub use self::{
    data::{AxisExtents, FilteredData, Filters, ViolinData},
    district::{
        DistrictAggregates, DistrictFeatureProperties, QuartileBreakpoints,
    },
};
