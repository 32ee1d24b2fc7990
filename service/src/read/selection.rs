//! [`Selection`] payload definitions.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::listing::District;

/// Payload highlighting the selected [`District`]s on the choropleth.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Selection {
    /// Currently selected [`District`]s.
    pub districts: BTreeSet<District>,
}
