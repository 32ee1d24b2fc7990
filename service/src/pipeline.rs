//! Dataset filter pipeline.
//!
//! Predicates are applied in a fixed order:
//! 1. rooms, bathrooms, price and area ranges, producing the
//!    district-agnostic subset the district aggregates are computed over;
//! 2. the district selection;
//! 3. whichever of the ads type and condition filters is not the violin
//!    plot [`Grouping`], producing the violin data;
//! 4. the filter of the [`Grouping`] itself, producing the filtered data.

use std::rc::Rc;

use crate::domain::{
    filter::{Grouping, Numeric, State, Years},
    listing::{Listing, Priced},
};

/// Order the [`Numeric`] ranges are applied in.
const RANGES: [Numeric; 4] =
    [Numeric::Rooms, Numeric::Bathrooms, Numeric::Price, Numeric::Area];

/// Outputs of the pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtered {
    /// Listings passing every range filter, regardless of the district
    /// selection.
    pub district_agnostic: Vec<Priced>,

    /// Listings passing every filter except the one of the active violin
    /// plot [`Grouping`].
    pub violin: Vec<Priced>,

    /// Listings passing every filter.
    pub filtered: Vec<Priced>,
}

/// Runs the whole pipeline over the `initial` listings.
#[must_use]
pub fn filter(initial: &[Rc<Listing>], state: &State) -> Filtered {
    let priced = price(initial, state.years());
    let district_agnostic = district_agnostic(&priced, state);
    let (violin, filtered) = narrow(&district_agnostic, state);
    Filtered {
        district_agnostic,
        violin,
        filtered,
    }
}

/// Prices the `initial` listings over the provided [`Years`] horizon.
#[must_use]
pub fn price(initial: &[Rc<Listing>], years: Years) -> Vec<Priced> {
    initial
        .iter()
        .map(|l| Priced::new(Rc::clone(l), years))
        .collect()
}

/// Applies the range filters of the [`State`] to the `priced` listings.
#[must_use]
pub fn district_agnostic(priced: &[Priced], state: &State) -> Vec<Priced> {
    let mut listings = priced.to_vec();
    for dimension in RANGES {
        if let Some(range) = state.range(dimension) {
            listings.retain(|l| range.contains(l.value(dimension)));
        }
    }
    listings
}

/// Applies the categorical filters of the [`State`] to the
/// `district_agnostic` listings.
///
/// Returns the violin data and the filtered data.
#[must_use]
pub fn narrow(
    district_agnostic: &[Priced],
    state: &State,
) -> (Vec<Priced>, Vec<Priced>) {
    let mut listings = district_agnostic
        .iter()
        .filter(|l| state.matches_district(&l.district))
        .cloned()
        .collect::<Vec<_>>();

    let by_ads_type = |l: &Priced| state.matches_ads_type(l.ads_type);
    let by_condition = |l: &Priced| state.matches_condition(&l.condition);
    match state.grouping() {
        Grouping::AdsType => {
            listings.retain(by_condition);
            let violin = listings.clone();
            listings.retain(by_ads_type);
            (violin, listings)
        }
        Grouping::Condition => {
            listings.retain(by_ads_type);
            let violin = listings.clone();
            listings.retain(by_condition);
            (violin, listings)
        }
    }
}
