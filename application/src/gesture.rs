//! [`Gesture`] definitions.

use serde::Deserialize;
use service::{
    command::{
        self, Change, SelectViolinGrouping, SetMapType, SetRange, SetYears,
        Toggle,
    },
    domain::{
        filter::{Grouping, MapType, Numeric, Years},
        listing::{condition, AdsType, District},
    },
    infra::Views,
    Command as _, Service,
};
use tracerr::Traced;

/// User gesture, as a single JSON object keyed by its name.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Click on a district.
    ToggleDistrict(District),

    /// Click on an ads type.
    ToggleAdsType(AdsType),

    /// Click on a condition.
    ToggleCondition(condition::Kind),

    /// Brush of a parallel-coordinates axis, or its reset.
    SetRange {
        /// Brushed axis.
        dimension: Numeric,

        /// Brushed `[min, max]` bounds, if any.
        range: Option<[f64; 2]>,
    },

    /// Change of the horizon input.
    SetYears(YearsInput),

    /// Click on a choropleth option.
    SetMapType(MapType),

    /// Switch of the violin plot grouping.
    SelectViolinGrouping(Grouping),
}

impl Gesture {
    /// Applies this [`Gesture`] to the provided [`Service`].
    ///
    /// # Errors
    ///
    /// If any of the [`Service`] views fails to be notified.
    pub fn apply<V: Views>(
        self,
        service: &mut Service<V>,
    ) -> Result<Change, Traced<command::ExecutionError>> {
        match self {
            Self::ToggleDistrict(d) => service.execute(Toggle::District(d)),
            Self::ToggleAdsType(t) => service.execute(Toggle::AdsType(t)),
            Self::ToggleCondition(c) => service.execute(Toggle::Condition(c)),
            Self::SetRange { dimension, range } => service.execute(
                range.map_or(SetRange::clear(dimension), |[min, max]| {
                    SetRange::between(dimension, min, max)
                }),
            ),
            Self::SetYears(years) => service.execute(SetYears(years.into())),
            Self::SetMapType(t) => service.execute(SetMapType(t)),
            Self::SelectViolinGrouping(g) => {
                service.execute(SelectViolinGrouping(g))
            }
        }
    }
}

/// Raw horizon input, either numeric or textual.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum YearsInput {
    /// Numeric input.
    Number(f64),

    /// Textual input.
    Text(String),
}

impl From<YearsInput> for Years {
    fn from(input: YearsInput) -> Self {
        match input {
            YearsInput::Number(n) => Self::from_input(n),
            YearsInput::Text(s) => Self::parse_lossy(&s),
        }
    }
}
