//! District aggregation definitions.

use std::collections::BTreeMap;

use common::define_kind;
use derive_more::{Deref, Into};
use serde::{Deserialize, Serialize};

use crate::{
    domain::listing::{District, Priced, Zone},
    stats::{self, Bucket, Quartiles},
};

/// District shape of the choropleth, keyed by its [`District`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    /// [`District`] this [`Feature`] outlines.
    pub district: District,

    /// [`Zone`] the [`District`] belongs to.
    pub zone: Zone,
}

/// Aggregate of the listings of a single [`District`].
///
/// Means are kept in full precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Aggregate {
    /// Number of listings.
    pub count: usize,

    /// Mean area of the listings.
    pub area_mean: f64,

    /// Mean price per square meter of the listings.
    pub price_mean: f64,
}

impl Aggregate {
    /// Returns the value of the provided [`Metric`].
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            #[expect(clippy::cast_precision_loss, reason = "dataset is small")]
            Metric::Count => self.count as f64,
            Metric::Area => self.area_mean,
            Metric::Price => self.price_mean,
        }
    }
}

define_kind! {
    #[doc = "Dimension of an [`Aggregate`]."]
    enum Metric {
        #[doc = "[`Aggregate::count`]."]
        Count,

        #[doc = "[`Aggregate::area_mean`]."]
        Area,

        #[doc = "[`Aggregate::price_mean`]."]
        Price,
    }
}

/// [`Aggregate`]s of every [`District`] having at least one listing.
#[derive(Clone, Debug, Default, Deref, Into, PartialEq)]
pub struct Aggregates(BTreeMap<District, Aggregate>);

/// Reduces the provided listings into per-[`District`] [`Aggregates`].
///
/// Districts without listings are absent from the result.
#[must_use]
pub fn aggregate(listings: &[Priced]) -> Aggregates {
    #[derive(Default)]
    struct Sums {
        count: usize,
        area: f64,
        price: f64,
    }

    let mut sums = BTreeMap::<&District, Sums>::new();
    for listing in listings {
        let sum = sums.entry(&listing.district).or_default();
        sum.count += 1;
        sum.area += listing.area;
        sum.price += listing.price_per_square_meter;
    }

    Aggregates(
        sums.into_iter()
            .map(|(district, Sums { count, area, price })| {
                #[expect(clippy::cast_precision_loss, reason = "dataset is small")]
                let n = count as f64;
                let aggregate = Aggregate {
                    count,
                    area_mean: area / n,
                    price_mean: price / n,
                };
                (district.clone(), aggregate)
            })
            .collect(),
    )
}

/// Quartile [`Breakpoints`] of every [`Metric`] across districts.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Breakpoints {
    /// [`Quartiles`] of [`Metric::Count`].
    pub count: Quartiles,

    /// [`Quartiles`] of [`Metric::Area`].
    pub area: Quartiles,

    /// [`Quartiles`] of [`Metric::Price`].
    pub price: Quartiles,
}

impl Breakpoints {
    /// Computes [`Breakpoints`] of the provided [`Aggregates`].
    ///
    /// [`None`] is returned if there are no [`Aggregates`].
    #[must_use]
    pub fn of(aggregates: &Aggregates) -> Option<Self> {
        let quartiles = |metric| {
            Quartiles::of(aggregates.values().map(|a| a.value(metric)))
        };
        Some(Self {
            count: quartiles(Metric::Count)?,
            area: quartiles(Metric::Area)?,
            price: quartiles(Metric::Price)?,
        })
    }

    /// Returns [`Quartiles`] of the provided [`Metric`].
    #[must_use]
    pub fn get(&self, metric: Metric) -> &Quartiles {
        match metric {
            Metric::Count => &self.count,
            Metric::Area => &self.area,
            Metric::Price => &self.price,
        }
    }
}

/// Properties merged onto a choropleth [`Feature`].
///
/// Means are rounded to one decimal place, while quartile buckets are
/// classified on full precision values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureProperties {
    /// [`District`] of the [`Feature`].
    pub district: District,

    /// [`Zone`] of the [`Feature`], if known.
    pub zone: Option<Zone>,

    /// Number of listings in the [`District`].
    pub count: usize,

    /// Mean area in the [`District`], if it has listings.
    pub area_mean: Option<f64>,

    /// Mean price per square meter in the [`District`], if it has listings.
    pub price_mean: Option<f64>,

    /// [`Bucket`] of [`Metric::Count`].
    pub count_quartile: Option<Bucket>,

    /// [`Bucket`] of [`Metric::Area`].
    pub area_quartile: Option<Bucket>,

    /// [`Bucket`] of [`Metric::Price`].
    pub price_quartile: Option<Bucket>,
}

impl FeatureProperties {
    /// Returns [`Bucket`] of the provided [`Metric`], if any.
    #[must_use]
    pub fn quartile(&self, metric: Metric) -> Option<Bucket> {
        match metric {
            Metric::Count => self.count_quartile,
            Metric::Area => self.area_quartile,
            Metric::Price => self.price_quartile,
        }
    }
}

/// Merges the provided [`Aggregates`] and [`Breakpoints`] into properties of
/// every [`Feature`].
///
/// Aggregated districts without a [`Feature`] are appended at the end.
#[must_use]
pub fn feature_properties(
    features: &[Feature],
    aggregates: &Aggregates,
    breakpoints: Option<&Breakpoints>,
) -> Vec<FeatureProperties> {
    let properties = |district: &District, zone: Option<&Zone>| {
        let aggregate = aggregates.get(district);
        let quartile = |metric| {
            aggregate
                .zip(breakpoints)
                .map(|(a, b)| b.get(metric).classify(a.value(metric)))
        };
        FeatureProperties {
            district: district.clone(),
            zone: zone.cloned(),
            count: aggregate.map_or(0, |a| a.count),
            area_mean: aggregate.map(|a| stats::round1(a.area_mean)),
            price_mean: aggregate.map(|a| stats::round1(a.price_mean)),
            count_quartile: quartile(Metric::Count),
            area_quartile: quartile(Metric::Area),
            price_quartile: quartile(Metric::Price),
        }
    };

    features
        .iter()
        .map(|f| properties(&f.district, Some(&f.zone)))
        .chain(
            aggregates
                .keys()
                .filter(|d| !features.iter().any(|f| &f.district == *d))
                .map(|d| properties(d, None)),
        )
        .collect()
}

#[cfg(test)]
mod spec {
    use std::rc::Rc;

    use crate::{
        domain::{
            filter::Years,
            listing::{AdsType, Condition, District, Listing, Priced, Zone},
        },
        stats::Bucket,
    };

    use super::{aggregate, feature_properties, Breakpoints, Feature, Metric};

    fn listing(district: &str, area: f64) -> Priced {
        Priced::new(
            Rc::new(Listing {
                area,
                rooms: 2,
                bathrooms: 1,
                listed_price: area * 1000.0,
                district: District::new(district).unwrap(),
                zone: Zone::new("North").unwrap(),
                ads_type: AdsType::Sell,
                condition: Condition::Used,
                price_per_square_meter: 1000.0,
            }),
            Years::MIN,
        )
    }

    fn district(name: &str) -> District {
        District::new(name).unwrap()
    }

    #[test]
    fn averages_area() {
        let aggregates = aggregate(&[
            listing("Faro", 100.0),
            listing("Faro", 200.0),
            listing("Faro", 300.0),
        ]);

        let faro = aggregates[&district("Faro")];
        assert_eq!(faro.count, 3);
        assert_eq!(faro.area_mean, 200.0);
        assert_eq!(faro.price_mean, 1000.0);
    }

    #[test]
    fn aggregates_per_district() {
        let listings = [
            listing("Porto", 80.0),
            listing("Porto", 120.0),
            listing("Lisboa", 200.0),
            listing("Lisboa", 300.0),
        ];

        let aggregates = aggregate(&listings);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[&district("Porto")].count, 2);
        assert_eq!(aggregates[&district("Porto")].area_mean, 100.0);
        assert_eq!(aggregates[&district("Lisboa")].count, 2);
        assert_eq!(aggregates[&district("Lisboa")].area_mean, 250.0);

        let breakpoints = Breakpoints::of(&aggregates).unwrap();
        assert_eq!(breakpoints.area.get(), [137.5, 175.0, 212.5, 250.0]);
        assert_eq!(breakpoints.count.get(), [2.0; 4]);
    }

    #[test]
    fn omits_empty_districts() {
        assert!(aggregate(&[]).is_empty());
        assert_eq!(Breakpoints::of(&aggregate(&[])), None);
    }

    #[test]
    fn merges_feature_properties() {
        let aggregates = aggregate(&[
            listing("Porto", 80.0),
            listing("Porto", 120.0),
            listing("Lisboa", 200.0),
            listing("Lisboa", 300.0),
            listing("Atlantis", 33.33),
        ]);
        let breakpoints = Breakpoints::of(&aggregates);
        let features = [
            Feature {
                district: district("Porto"),
                zone: Zone::new("North").unwrap(),
            },
            Feature {
                district: district("Beja"),
                zone: Zone::new("South").unwrap(),
            },
            Feature {
                district: district("Lisboa"),
                zone: Zone::new("Centre").unwrap(),
            },
        ];

        let properties =
            feature_properties(&features, &aggregates, breakpoints.as_ref());

        assert_eq!(properties.len(), 4);

        let porto = &properties[0];
        assert_eq!(porto.count, 2);
        assert_eq!(porto.area_mean, Some(100.0));
        assert_eq!(porto.zone, Some(Zone::new("North").unwrap()));

        let beja = &properties[1];
        assert_eq!(beja.count, 0);
        assert_eq!(beja.area_mean, None);
        assert_eq!(beja.quartile(Metric::Area), None);

        let lisboa = &properties[2];
        assert_eq!(lisboa.area_quartile, Some(Bucket::Q4));

        let atlantis = &properties[3];
        assert_eq!(atlantis.district, district("Atlantis"));
        assert_eq!(atlantis.zone, None);
        assert_eq!(atlantis.area_mean, Some(33.3));
        assert_eq!(atlantis.count_quartile, Some(Bucket::Q1));
    }
}
