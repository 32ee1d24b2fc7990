//! [`Command`] definition.

pub mod load_dataset;
pub mod select_violin_grouping;
pub mod set_map_type;
pub mod set_range;
pub mod set_years;
pub mod toggle;

use common::define_kind;
use derive_more::{Display, Error, From};

use crate::infra::view;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    load_dataset::LoadDataset, select_violin_grouping::SelectViolinGrouping,
    set_map_type::SetMapType, set_range::SetRange, set_years::SetYears,
    toggle::Toggle,
};

define_kind! {
    #[doc = "Change applied by a [`Command`], deciding which views are \
             notified."]
    enum Change {
        #[doc = "Nothing has changed, so no view is notified."]
        Unchanged,

        #[doc = "District selection has changed."]
        Selection,

        #[doc = "Ads type or condition selection has changed. The \
                 district-agnostic subset only depends on ranges and \
                 horizon, so aggregates are kept."]
        Category,

        #[doc = "Violin plot grouping has changed."]
        Grouping,

        #[doc = "Aggregate displayed by the choropleth has changed."]
        MapType,

        #[doc = "District-agnostic subset has changed, so district \
                 aggregates are recomputed."]
        Subset,
    }
}

impl Change {
    /// Returns [`Change::Unchanged`] unless `changed`.
    #[must_use]
    pub fn or_unchanged(self, changed: bool) -> Self {
        if changed {
            self
        } else {
            Self::Unchanged
        }
    }
}

/// Error of a [`Command`] execution.
///
/// The filter state is already updated whenever it's returned.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`view::View`] failed to be notified.
    #[display("`View` notification failed: {_0}")]
    View(view::Error),
}
