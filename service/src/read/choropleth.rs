//! [`Choropleth`] payload definitions.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{
    district::{Breakpoints, FeatureProperties},
    filter::MapType,
    listing::District,
};

/// Payload of the choropleth view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Choropleth {
    /// Aggregate to be displayed.
    pub map_type: MapType,

    /// Properties to be merged onto the district features.
    pub features: Vec<FeatureProperties>,

    /// Current [`Breakpoints`], for the legend labels.
    pub breakpoints: Option<Breakpoints>,

    /// Currently selected [`District`]s.
    pub selected: BTreeSet<District>,
}
