//! View update dispatching.

use std::time::Instant;

use common::operations::{Draw, Highlight};
use tracerr::Traced;
use tracing as log;

use crate::{
    command::Change,
    domain::district::{self, Aggregates, Breakpoints},
    infra::{view, Views},
    pipeline::{self, Filtered},
    read::{
        Axes, Choropleth, ParallelCoordinates, Selection, ViolinPlot,
    },
    Service,
};

/// Data derived from the loaded dataset under the current filter state.
#[derive(Clone, Debug, Default)]
pub(crate) struct Snapshot {
    /// Outputs of the last pipeline run.
    pub(crate) filtered: Filtered,

    /// [`Aggregates`] of the district-agnostic subset.
    pub(crate) aggregates: Aggregates,

    /// [`Breakpoints`] of the [`Aggregates`], or the baseline ones.
    pub(crate) breakpoints: Option<Breakpoints>,

    /// [`Axes`] of the whole priced dataset.
    pub(crate) axes: Axes,
}

impl<V: Views> Service<V> {
    /// Brings the derived data up to date with the provided [`Change`] and
    /// notifies the affected views.
    ///
    /// Only a [`Change::Subset`] recomputes the district aggregates.
    ///
    /// # Errors
    ///
    /// With the first [`view::Error`], once every affected view has been
    /// notified.
    pub(crate) fn refresh(
        &mut self,
        change: Change,
    ) -> Result<Change, Traced<view::Error>> {
        if change == Change::Unchanged {
            return Ok(change);
        }

        let started = Instant::now();
        if change != Change::MapType {
            self.snapshot.filtered =
                pipeline::filter(&self.dataset.listings, &self.state);
        }
        if change == Change::Subset {
            let snapshot = &mut self.snapshot;
            snapshot.axes = Axes::of(&pipeline::price(
                &self.dataset.listings,
                self.state.years(),
            ));
            snapshot.aggregates =
                district::aggregate(&snapshot.filtered.district_agnostic);
            snapshot.breakpoints = Breakpoints::of(&snapshot.aggregates)
                .or(self.dataset.baseline);
        }
        let elapsed = started.elapsed();
        if elapsed > self.config.frame_budget {
            log::warn!(
                "`{change}` refresh took {elapsed:?}, exceeding {:?} budget",
                self.config.frame_budget,
            );
        } else {
            log::debug!("`{change}` refresh took {elapsed:?}");
        }

        self.dispatch(change).map(|()| change)
    }

    /// Notifies every view affected by the provided [`Change`], even if some
    /// of them fail.
    fn dispatch(&mut self, change: Change) -> Result<(), Traced<view::Error>> {
        let mut results = Vec::with_capacity(4);
        if !matches!(change, Change::Unchanged | Change::MapType) {
            let payload = self.parallel_coordinates();
            results.push(self.views.execute(Draw(payload)));
            let payload = self.violin_plot();
            results.push(self.views.execute(Draw(payload)));
        }
        if matches!(change, Change::Subset | Change::MapType) {
            let payload = self.choropleth();
            results.push(self.views.execute(Draw(payload)));
        }
        if change == Change::Selection {
            let payload = Selection {
                districts: self.state.districts().clone(),
            };
            results.push(self.views.execute(Highlight(payload)));
        }

        let mut first = None;
        for e in results.into_iter().filter_map(Result::err) {
            log::error!("Failed to update view: {e}");
            _ = first.get_or_insert(e);
        }
        first.map_or(Ok(()), Err)
    }

    /// Builds the [`ParallelCoordinates`] payload.
    fn parallel_coordinates(&self) -> ParallelCoordinates {
        ParallelCoordinates {
            listings: self.snapshot.filtered.filtered.clone(),
            axes: self.snapshot.axes,
        }
    }

    /// Builds the [`ViolinPlot`] payload.
    fn violin_plot(&self) -> ViolinPlot {
        ViolinPlot::new(
            self.state.grouping(),
            &self.snapshot.filtered.violin,
            self.config.violin,
        )
    }

    /// Builds the [`Choropleth`] payload.
    fn choropleth(&self) -> Choropleth {
        Choropleth {
            map_type: self.state.map_type(),
            features: district::feature_properties(
                &self.dataset.features,
                &self.snapshot.aggregates,
                self.snapshot.breakpoints.as_ref(),
            ),
            breakpoints: self.snapshot.breakpoints,
            selected: self.state.districts().clone(),
        }
    }
}
