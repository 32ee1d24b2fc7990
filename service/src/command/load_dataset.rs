//! [`Command`] for loading a dataset.

use std::{collections::BTreeSet, rc::Rc};

use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        district::{Breakpoints, Feature},
        filter::State,
        listing::Record,
        Listing,
    },
    infra::Views,
    Dataset, Service,
};

use super::{Change, Command, ExecutionError};

/// [`Command`] replacing the loaded dataset, and resetting the filter
/// [`State`].
#[derive(Clone, Debug, Default)]
pub struct LoadDataset {
    /// Raw listing [`Record`]s.
    ///
    /// Invalid ones are skipped.
    pub records: Vec<Record>,

    /// District [`Feature`]s of the choropleth.
    pub features: Vec<Feature>,

    /// [`Breakpoints`] to fall back to whenever none can be derived.
    pub baseline: Option<Breakpoints>,
}

impl<V: Views> Command<LoadDataset> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: LoadDataset) -> Result<Self::Ok, Self::Err> {
        let LoadDataset {
            records,
            features,
            baseline,
        } = cmd;

        let total = records.len();
        let listings = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, r)| {
                Listing::try_from(r)
                    .map(Rc::new)
                    .map_err(|e| log::warn!("Skipping record #{i}: {e}"))
                    .ok()
            })
            .collect::<Vec<_>>();
        let unknown = listings
            .iter()
            .map(|l| &l.district)
            .chain(features.iter().map(|f| &f.district))
            .filter(|d| !d.is_known())
            .collect::<BTreeSet<_>>();
        for district in unknown {
            log::warn!("`{district}` is not a known district");
        }
        log::info!(
            "Loaded {} of {total} listings and {} district features",
            listings.len(),
            features.len(),
        );

        self.dataset = Dataset {
            listings,
            features,
            baseline,
        };
        self.state = State::new(self.config.default_years);

        self.refresh(Change::Subset)
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}
