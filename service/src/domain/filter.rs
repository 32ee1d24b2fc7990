//! Filter [`State`] definitions.

use std::collections::BTreeSet;

use common::{define_kind, Range};
use derive_more::Display;
use serde::Serialize;

use crate::domain::{
    district::Metric,
    listing::{condition, AdsType, Condition, District},
};

/// Active filters of the dashboard.
///
/// Empty set-valued filters mean "no restriction on this dimension", never
/// "exclude everything".
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct State {
    /// Selected [`District`]s.
    districts: BTreeSet<District>,

    /// Selected [`AdsType`]s.
    ads_types: BTreeSet<AdsType>,

    /// Selected [`condition::Kind`]s.
    conditions: BTreeSet<condition::Kind>,

    /// Restriction on [`Numeric::Rooms`], if any.
    rooms: Option<Range<f64>>,

    /// Restriction on [`Numeric::Bathrooms`], if any.
    bathrooms: Option<Range<f64>>,

    /// Restriction on [`Numeric::Area`], if any.
    area: Option<Range<f64>>,

    /// Restriction on [`Numeric::Price`], if any.
    price: Option<Range<f64>>,

    /// Horizon rent prices are brought to.
    years: Years,

    /// Aggregate displayed by the choropleth.
    map_type: MapType,

    /// Dimension the violin plot is split by.
    grouping: Grouping,
}

impl State {
    /// Creates a new [`State`] with every [`AdsType`] selected, nothing else
    /// restricted, and the provided horizon.
    #[must_use]
    pub fn new(years: Years) -> Self {
        Self {
            districts: BTreeSet::new(),
            ads_types: AdsType::ALL.iter().copied().collect(),
            conditions: BTreeSet::new(),
            rooms: None,
            bathrooms: None,
            area: None,
            price: None,
            years,
            map_type: MapType::None,
            grouping: Grouping::AdsType,
        }
    }

    /// Returns the selected [`District`]s.
    #[must_use]
    pub fn districts(&self) -> &BTreeSet<District> {
        &self.districts
    }

    /// Returns the selected [`AdsType`]s.
    #[must_use]
    pub fn ads_types(&self) -> &BTreeSet<AdsType> {
        &self.ads_types
    }

    /// Returns the selected [`condition::Kind`]s.
    #[must_use]
    pub fn conditions(&self) -> &BTreeSet<condition::Kind> {
        &self.conditions
    }

    /// Returns the restriction on the provided [`Numeric`] dimension, if any.
    #[must_use]
    pub fn range(&self, dimension: Numeric) -> Option<Range<f64>> {
        match dimension {
            Numeric::Rooms => self.rooms,
            Numeric::Bathrooms => self.bathrooms,
            Numeric::Area => self.area,
            Numeric::Price => self.price,
        }
    }

    /// Returns the active [`Years`] horizon.
    #[must_use]
    pub fn years(&self) -> Years {
        self.years
    }

    /// Returns the active [`MapType`].
    #[must_use]
    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    /// Returns the active violin plot [`Grouping`].
    #[must_use]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Selects the provided [`District`], or deselects it if it's selected
    /// already.
    ///
    /// Returns whether the [`District`] is selected afterwards.
    pub fn toggle_district(&mut self, district: District) -> bool {
        toggle(&mut self.districts, district)
    }

    /// Selects the provided [`AdsType`], or deselects it if it's selected
    /// already.
    ///
    /// Returns whether the [`AdsType`] is selected afterwards.
    pub fn toggle_ads_type(&mut self, ads_type: AdsType) -> bool {
        toggle(&mut self.ads_types, ads_type)
    }

    /// Selects the provided [`condition::Kind`], or deselects it if it's
    /// selected already.
    ///
    /// Returns whether the [`condition::Kind`] is selected afterwards.
    pub fn toggle_condition(&mut self, condition: condition::Kind) -> bool {
        toggle(&mut self.conditions, condition)
    }

    /// Restricts the provided [`Numeric`] dimension to the given [`Range`],
    /// or lifts the restriction on [`None`].
    ///
    /// Returns whether the restriction has changed.
    pub fn set_range(
        &mut self,
        dimension: Numeric,
        range: Option<Range<f64>>,
    ) -> bool {
        let slot = match dimension {
            Numeric::Rooms => &mut self.rooms,
            Numeric::Bathrooms => &mut self.bathrooms,
            Numeric::Area => &mut self.area,
            Numeric::Price => &mut self.price,
        };
        if *slot == range {
            return false;
        }
        *slot = range;
        true
    }

    /// Sets the [`Years`] horizon.
    ///
    /// Returns whether the horizon has changed.
    pub fn set_years(&mut self, years: Years) -> bool {
        if self.years == years {
            return false;
        }
        self.years = years;
        true
    }

    /// Adopts the provided [`MapType`], or resets it to [`MapType::None`] if
    /// it's the active one already.
    ///
    /// Returns the [`MapType`] active afterwards.
    pub fn set_map_type(&mut self, option: MapType) -> MapType {
        self.map_type = if self.map_type == option {
            MapType::None
        } else {
            option
        };
        self.map_type
    }

    /// Sets the violin plot [`Grouping`].
    ///
    /// Returns whether the [`Grouping`] has changed.
    pub fn set_grouping(&mut self, grouping: Grouping) -> bool {
        if self.grouping == grouping {
            return false;
        }
        self.grouping = grouping;
        true
    }

    /// Checks whether the provided [`District`] passes the district filter.
    #[must_use]
    pub fn matches_district(&self, district: &District) -> bool {
        self.districts.is_empty() || self.districts.contains(district)
    }

    /// Checks whether the provided [`AdsType`] passes the ads type filter.
    #[must_use]
    pub fn matches_ads_type(&self, ads_type: AdsType) -> bool {
        self.ads_types.is_empty() || self.ads_types.contains(&ads_type)
    }

    /// Checks whether the provided [`Condition`] passes the condition filter.
    ///
    /// Any [`Condition::Other`] matches [`condition::Kind::Others`].
    #[must_use]
    pub fn matches_condition(&self, condition: &Condition) -> bool {
        self.conditions.is_empty() || self.conditions.contains(&condition.kind())
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Years::default())
    }
}

/// Adds the `value` to the `set` if it's absent, or removes it otherwise.
///
/// Returns whether the `value` is present afterwards.
fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        return false;
    }
    _ = set.insert(value);
    true
}

/// Number of years rent prices are projected over.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Years(u8);

impl Years {
    /// Shortest allowed horizon.
    pub const MIN: Self = Self(1);

    /// Longest allowed horizon.
    pub const MAX: Self = Self(99);

    /// Creates new [`Years`], clamping the provided number into the
    /// [`Years::MIN`]..=[`Years::MAX`] bounds.
    #[must_use]
    pub fn clamped(years: i64) -> Self {
        let years = years.clamp(Self::MIN.0.into(), Self::MAX.0.into());
        Self(u8::try_from(years).unwrap_or(Self::MAX.0))
    }

    /// Creates new [`Years`] out of an arbitrary numeric input, rounding it
    /// and clamping into the allowed bounds.
    ///
    /// `NaN` is clamped to [`Years::MIN`].
    #[must_use]
    pub fn from_input(years: f64) -> Self {
        if years.is_nan() {
            return Self::MIN;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "saturating cast, clamped right after"
        )]
        let years = years.round() as i64;
        Self::clamped(years)
    }

    /// Parses new [`Years`] out of a textual input, never failing.
    ///
    /// Non-numeric input is clamped to [`Years::MIN`].
    #[must_use]
    pub fn parse_lossy(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map_or(Self::MIN, Self::from_input)
    }

    /// Returns the number of years.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the factor turning a monthly rent into a total over these
    /// [`Years`].
    #[must_use]
    pub fn rent_multiplier(self) -> f64 {
        f64::from(self.0) * 12.0
    }
}

impl Default for Years {
    fn default() -> Self {
        Self::MIN
    }
}

define_kind! {
    #[doc = "Numeric dimension of a listing which can be restricted by a range."]
    enum Numeric {
        #[doc = "Number of rooms."]
        Rooms,

        #[doc = "Number of bathrooms."]
        Bathrooms,

        #[doc = "Area, in square meters."]
        Area,

        #[doc = "Price, brought to the active horizon."]
        Price,
    }
}

define_kind! {
    #[doc = "District aggregate displayed by the choropleth."]
    enum MapType {
        #[doc = "No aggregate is displayed."]
        None,

        #[doc = "Mean area."]
        Area,

        #[doc = "Mean price per square meter."]
        PricePerSquareMeter,

        #[doc = "Number of available listings."]
        NumberOfAvailability,
    }
}

impl MapType {
    /// Returns the [`Metric`] displayed for this [`MapType`], if any.
    #[must_use]
    pub fn metric(self) -> Option<Metric> {
        match self {
            Self::None => None,
            Self::Area => Some(Metric::Area),
            Self::PricePerSquareMeter => Some(Metric::Price),
            Self::NumberOfAvailability => Some(Metric::Count),
        }
    }
}

define_kind! {
    #[doc = "Dimension the violin plot compares prices by."]
    enum Grouping {
        #[doc = "Rent versus sale."]
        AdsType,

        #[doc = "New versus renovated."]
        Condition,
    }
}
