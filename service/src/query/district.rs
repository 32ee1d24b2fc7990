//! [`Query`]s of the district aggregates.

use std::convert::Infallible;

use crate::{
    domain::district::{self, Aggregates, Breakpoints, FeatureProperties},
    Service,
};

use super::Query;

/// [`Query`] of the [`Aggregates`] of the district-agnostic subset.
#[derive(Clone, Copy, Debug)]
pub struct DistrictAggregates;

impl<V> Query<DistrictAggregates> for Service<V> {
    type Ok = Aggregates;
    type Err = Infallible;

    fn query(&self, _: DistrictAggregates) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.aggregates.clone())
    }
}

/// [`Query`] of the [`FeatureProperties`] of every loaded district feature.
#[derive(Clone, Copy, Debug)]
pub struct DistrictFeatureProperties;

impl<V> Query<DistrictFeatureProperties> for Service<V> {
    type Ok = Vec<FeatureProperties>;
    type Err = Infallible;

    fn query(
        &self,
        _: DistrictFeatureProperties,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(district::feature_properties(
            &self.dataset.features,
            &self.snapshot.aggregates,
            self.snapshot.breakpoints.as_ref(),
        ))
    }
}

/// [`Query`] of the current [`Breakpoints`], if any.
#[derive(Clone, Copy, Debug)]
pub struct QuartileBreakpoints;

impl<V> Query<QuartileBreakpoints> for Service<V> {
    type Ok = Option<Breakpoints>;
    type Err = Infallible;

    fn query(&self, _: QuartileBreakpoints) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.breakpoints)
    }
}
