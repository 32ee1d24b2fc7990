//! [`Query`]s of the filtered data.

use std::convert::Infallible;

use crate::{
    domain::{filter::State, Priced},
    read::Axes,
    Service,
};

use super::Query;

/// [`Query`] of the listings passing every active filter.
#[derive(Clone, Copy, Debug)]
pub struct FilteredData;

impl<V> Query<FilteredData> for Service<V> {
    type Ok = Vec<Priced>;
    type Err = Infallible;

    fn query(&self, _: FilteredData) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.filtered.filtered.clone())
    }
}

/// [`Query`] of the listings passing every active filter except the one of
/// the violin plot grouping.
#[derive(Clone, Copy, Debug)]
pub struct ViolinData;

impl<V> Query<ViolinData> for Service<V> {
    type Ok = Vec<Priced>;
    type Err = Infallible;

    fn query(&self, _: ViolinData) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.filtered.violin.clone())
    }
}

/// [`Query`] of the active filter [`State`].
#[derive(Clone, Copy, Debug)]
pub struct Filters;

impl<V> Query<Filters> for Service<V> {
    type Ok = State;
    type Err = Infallible;

    fn query(&self, _: Filters) -> Result<Self::Ok, Self::Err> {
        Ok(self.state.clone())
    }
}

/// [`Query`] of the parallel-coordinates [`Axes`].
#[derive(Clone, Copy, Debug)]
pub struct AxisExtents;

impl<V> Query<AxisExtents> for Service<V> {
    type Ok = Axes;
    type Err = Infallible;

    fn query(&self, _: AxisExtents) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.axes)
    }
}
