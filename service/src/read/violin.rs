//! [`ViolinPlot`] payload definitions.

use serde::Serialize;
use smart_default::SmartDefault;

use crate::{
    domain::{
        filter::Grouping,
        listing::{condition, AdsType, Priced},
    },
    stats::density,
};

/// Configuration of the [`ViolinPlot`] density estimation.
#[derive(Clone, Copy, Debug, PartialEq, SmartDefault)]
pub struct Config {
    /// Bandwidth of the Gaussian kernel, in euros.
    #[default(200.0)]
    pub bandwidth: f64,

    /// Approximate number of points the density is evaluated at.
    #[default(50)]
    pub ticks: usize,
}

/// Payload of the violin-plot view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViolinPlot {
    /// Dimension the prices are split by.
    pub grouping: Grouping,

    /// Upper bound of the price axis.
    pub x_max: f64,

    /// Compared [`Group`]s, in display order.
    pub groups: Vec<Group>,
}

/// Single category of a [`ViolinPlot`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Group {
    /// Name of the category.
    pub category: String,

    /// Prices of the listings in this category.
    pub prices: Vec<f64>,

    /// `[price, density]` pairs over the price axis.
    ///
    /// Empty if the category has no listings.
    pub density: Vec<[f64; 2]>,
}

impl ViolinPlot {
    /// Splits the provided violin data by the given [`Grouping`] and
    /// estimates the price density of each category.
    #[must_use]
    pub fn new(grouping: Grouping, listings: &[Priced], config: Config) -> Self {
        let x_max = listings
            .iter()
            .map(|l| l.price)
            .max_by(f64::total_cmp)
            .unwrap_or_default();
        let points = density::ticks(0.0, x_max, config.ticks);

        let category = |l: &Priced| match grouping {
            Grouping::AdsType => l.ads_type.to_string(),
            Grouping::Condition => l.condition.kind().to_string(),
        };
        let domain = match grouping {
            Grouping::AdsType => {
                [AdsType::Rent, AdsType::Sell].map(|t| t.to_string())
            }
            Grouping::Condition => {
                [condition::Kind::New, condition::Kind::Renovated]
                    .map(|k| k.to_string())
            }
        };

        let groups = domain
            .into_iter()
            .map(|category_name| {
                let prices = listings
                    .iter()
                    .filter(|l| category(*l) == category_name)
                    .map(|l| l.price)
                    .collect::<Vec<_>>();
                Group {
                    density: density::estimate(
                        &prices,
                        &points,
                        config.bandwidth,
                    ),
                    category: category_name,
                    prices,
                }
            })
            .collect();

        Self {
            grouping,
            x_max,
            groups,
        }
    }
}
