//! In-memory [`View`] implementation.

use std::collections::BTreeSet;

use common::operations::{Draw, Highlight};
use tracerr::Traced;

use crate::read::{Choropleth, ParallelCoordinates, Selection, ViolinPlot};

use super::{Error, Kind, View};

/// [`View`] recording every payload it's notified with.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Drawn [`ParallelCoordinates`], oldest first.
    pub parallel_coordinates: Vec<ParallelCoordinates>,

    /// Drawn [`ViolinPlot`]s, oldest first.
    pub violin_plots: Vec<ViolinPlot>,

    /// Drawn [`Choropleth`]s, oldest first.
    pub choropleths: Vec<Choropleth>,

    /// Highlighted [`Selection`]s, oldest first.
    pub selections: Vec<Selection>,

    /// Every notification attempt, in order.
    pub notified: Vec<Kind>,

    /// [`Kind`]s of views failing to render.
    failing: BTreeSet<Kind>,
}

impl Memory {
    /// Makes the provided [`Kind`] of view fail on every notification.
    pub fn fail(&mut self, view: Kind) {
        _ = self.failing.insert(view);
    }

    /// Forgets every recorded payload and notification.
    pub fn clear(&mut self) {
        self.parallel_coordinates.clear();
        self.violin_plots.clear();
        self.choropleths.clear();
        self.selections.clear();
        self.notified.clear();
    }

    /// Records a notification of the provided [`Kind`] of view, failing if
    /// it's configured to.
    fn notify(&mut self, view: Kind) -> Result<(), Traced<Error>> {
        self.notified.push(view);
        if self.failing.contains(&view) {
            return Err(tracerr::new!(Error::Render {
                view,
                reason: "configured to fail".to_owned(),
            }));
        }
        Ok(())
    }
}

impl View<Draw<ParallelCoordinates>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<ParallelCoordinates>,
    ) -> Result<Self::Ok, Self::Err> {
        self.notify(Kind::ParallelCoordinates)?;
        self.parallel_coordinates.push(payload);
        Ok(())
    }
}

impl View<Draw<ViolinPlot>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<ViolinPlot>,
    ) -> Result<Self::Ok, Self::Err> {
        self.notify(Kind::ViolinPlot)?;
        self.violin_plots.push(payload);
        Ok(())
    }
}

impl View<Draw<Choropleth>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<Choropleth>,
    ) -> Result<Self::Ok, Self::Err> {
        self.notify(Kind::Choropleth)?;
        self.choropleths.push(payload);
        Ok(())
    }
}

impl View<Highlight<Selection>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &mut self,
        Highlight(payload): Highlight<Selection>,
    ) -> Result<Self::Ok, Self::Err> {
        self.notify(Kind::Selection)?;
        self.selections.push(payload);
        Ok(())
    }
}
