//! Service contains the filter-and-aggregation core of the dashboard.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
mod dispatch;
pub mod domain;
pub mod infra;
pub mod pipeline;
pub mod query;
pub mod read;
pub mod stats;

use std::{rc::Rc, time};

use smart_default::SmartDefault;

use crate::{
    dispatch::Snapshot,
    domain::{
        district::{Breakpoints, Feature},
        filter::{State, Years},
        Listing,
    },
};

#[cfg(doc)]
use crate::infra::View;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Years`] horizon the filter [`State`] starts with.
    pub default_years: Years,

    /// Duration a single pipeline run is expected to fit in.
    ///
    /// Slower runs are logged as warnings.
    #[default(time::Duration::from_millis(16))]
    pub frame_budget: time::Duration,

    /// [`read::violin::Config`] of the violin plot.
    pub violin: read::violin::Config,
}

/// Domain service.
///
/// Owns the filter [`State`], the loaded dataset and everything derived from
/// them, notifying its [`View`]s about every change.
#[derive(Clone, Debug)]
pub struct Service<V> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Active filter [`State`].
    state: State,

    /// Loaded dataset.
    dataset: Dataset,

    /// Data derived from the [`Dataset`] under the current [`State`].
    snapshot: Snapshot,

    /// [`View`]s of this [`Service`].
    views: V,
}

impl<V> Service<V> {
    /// Creates a new [`Service`] with the provided parameters and no data
    /// loaded.
    #[must_use]
    pub fn new(config: Config, views: V) -> Self {
        Self {
            state: State::new(config.default_years),
            config,
            dataset: Dataset::default(),
            snapshot: Snapshot::default(),
            views,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the active filter [`State`] of this [`Service`].
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns [`View`]s of this [`Service`].
    #[must_use]
    pub fn views(&self) -> &V {
        &self.views
    }

    /// Returns mutable [`View`]s of this [`Service`].
    #[must_use]
    pub fn views_mut(&mut self) -> &mut V {
        &mut self.views
    }
}

/// Dataset loaded into a [`Service`].
#[derive(Clone, Debug, Default)]
struct Dataset {
    /// Every valid [`Listing`], in load order.
    listings: Vec<Rc<Listing>>,

    /// District [`Feature`]s of the choropleth.
    features: Vec<Feature>,

    /// [`Breakpoints`] to fall back to whenever none can be derived.
    baseline: Option<Breakpoints>,
}

#[cfg(test)]
mod spec {
    use common::Range;

    use crate::{
        command::{
            Change, LoadDataset, SelectViolinGrouping, SetMapType, SetRange,
            SetYears, Toggle,
        },
        domain::{
            district::{Breakpoints, Feature},
            filter::{Grouping, MapType, Numeric, Years},
            listing::{condition, AdsType, District, Record, Zone},
        },
        infra::{view, Memory},
        query::{
            AxisExtents, DistrictAggregates, DistrictFeatureProperties,
            FilteredData, Filters, QuartileBreakpoints, ViolinData,
        },
        stats::{Bucket, Quartiles},
        Command as _, Config, Query as _, Service,
    };

    fn record(district: &str, ads_type: AdsType, area: f64) -> Record {
        Record {
            area,
            rooms: 2.0,
            bathrooms: 1.0,
            price: area * 1000.0,
            district: district.to_owned(),
            zone: "North".to_owned(),
            ads_type,
            condition: "Used".to_owned(),
            price_per_square_meter: 1000.0,
        }
    }

    fn district(name: &str) -> District {
        District::new(name).unwrap()
    }

    fn loaded() -> Service<Memory> {
        let mut svc = Service::new(Config::default(), Memory::default());
        let change = svc
            .execute(LoadDataset {
                records: vec![
                    record("Porto", AdsType::Sell, 80.0),
                    record("Porto", AdsType::Sell, 120.0),
                    record("Lisboa", AdsType::Sell, 200.0),
                    record("Lisboa", AdsType::Rent, 300.0),
                ],
                features: ["Porto", "Lisboa", "Faro"]
                    .into_iter()
                    .map(|d| Feature {
                        district: district(d),
                        zone: Zone::new("North").unwrap(),
                    })
                    .collect(),
                baseline: None,
            })
            .unwrap();
        assert_eq!(change, Change::Subset);
        svc.views_mut().clear();
        svc
    }

    fn filtered(svc: &Service<Memory>) -> usize {
        svc.query(FilteredData).unwrap().len()
    }

    #[test]
    fn load_draws_every_view() {
        let mut svc = Service::new(Config::default(), Memory::default());

        _ = svc
            .execute(LoadDataset {
                records: vec![record("Porto", AdsType::Sell, 80.0)],
                features: vec![],
                baseline: None,
            })
            .unwrap();

        assert_eq!(
            svc.views().notified,
            [
                view::Kind::ParallelCoordinates,
                view::Kind::ViolinPlot,
                view::Kind::Choropleth,
            ],
        );
        assert_eq!(svc.views().parallel_coordinates[0].listings.len(), 1);
    }

    #[test]
    fn skips_invalid_records() {
        let mut svc = Service::new(Config::default(), Memory::default());
        let mut bad = record("Porto", AdsType::Sell, 80.0);
        bad.rooms = f64::NAN;

        _ = svc
            .execute(LoadDataset {
                records: vec![bad, record("Faro", AdsType::Rent, 50.0)],
                features: vec![],
                baseline: None,
            })
            .unwrap();

        assert_eq!(filtered(&svc), 1);
    }

    #[test]
    fn aggregates_district_agnostic_subset() {
        let svc = loaded();

        let aggregates = svc.query(DistrictAggregates).unwrap();

        assert_eq!(aggregates[&district("Porto")].count, 2);
        assert_eq!(aggregates[&district("Porto")].area_mean, 100.0);
        assert_eq!(aggregates[&district("Lisboa")].area_mean, 250.0);

        let breakpoints = svc.query(QuartileBreakpoints).unwrap().unwrap();
        assert_eq!(breakpoints.area.get(), [137.5, 175.0, 212.5, 250.0]);
    }

    #[test]
    fn district_toggle_only_highlights() {
        let mut svc = loaded();
        let before = svc.query(DistrictAggregates).unwrap();

        let change = svc.execute(Toggle::District(district("Porto"))).unwrap();

        assert_eq!(change, Change::Selection);
        assert_eq!(
            svc.views().notified,
            [
                view::Kind::ParallelCoordinates,
                view::Kind::ViolinPlot,
                view::Kind::Selection,
            ],
        );
        assert_eq!(filtered(&svc), 2);
        assert_eq!(svc.query(DistrictAggregates).unwrap(), before);
        assert!(svc.views().selections[0]
            .districts
            .contains(&district("Porto")));
    }

    #[test]
    fn district_toggle_round_trips() {
        let mut svc = loaded();
        let before = svc.query(FilteredData).unwrap();

        _ = svc.execute(Toggle::District(district("Porto"))).unwrap();
        _ = svc.execute(Toggle::District(district("Porto"))).unwrap();

        assert_eq!(svc.query(FilteredData).unwrap(), before);
    }

    #[test]
    fn category_toggle_keeps_choropleth() {
        let mut svc = loaded();

        let change = svc.execute(Toggle::AdsType(AdsType::Rent)).unwrap();

        assert_eq!(change, Change::Category);
        assert_eq!(
            svc.views().notified,
            [view::Kind::ParallelCoordinates, view::Kind::ViolinPlot],
        );
        assert_eq!(filtered(&svc), 3);
        assert_eq!(svc.views().violin_plots[0].groups[0].prices.len(), 1);
    }

    #[test]
    fn range_recomputes_aggregates() {
        let mut svc = loaded();

        let change = svc
            .execute(SetRange::between(Numeric::Area, 100.0, 250.0))
            .unwrap();

        assert_eq!(change, Change::Subset);
        assert_eq!(
            svc.views().notified,
            [
                view::Kind::ParallelCoordinates,
                view::Kind::ViolinPlot,
                view::Kind::Choropleth,
            ],
        );
        let aggregates = svc.query(DistrictAggregates).unwrap();
        assert_eq!(aggregates[&district("Porto")].count, 1);
        assert_eq!(aggregates[&district("Lisboa")].area_mean, 200.0);

        let choropleth = &svc.views().choropleths[0];
        assert_eq!(choropleth.features.len(), 3);
        assert_eq!(choropleth.features[2].count, 0);
        assert_eq!(choropleth.features[2].area_quartile, None);
    }

    #[test]
    fn same_range_is_unchanged() {
        let mut svc = loaded();
        _ = svc.execute(SetRange::between(Numeric::Rooms, 1.0, 3.0)).unwrap();
        svc.views_mut().clear();

        let change =
            svc.execute(SetRange::between(Numeric::Rooms, 3.0, 1.0)).unwrap();

        assert_eq!(change, Change::Unchanged);
        assert!(svc.views().notified.is_empty());
    }

    #[test]
    fn years_rescale_and_keep_filters() {
        let mut svc = loaded();
        _ = svc.execute(Toggle::District(district("Lisboa"))).unwrap();
        _ = svc
            .execute(SetRange::between(Numeric::Price, 0.0, 5_000_000.0))
            .unwrap();
        assert_eq!(filtered(&svc), 2);

        let change = svc.execute(SetYears(Years::clamped(10))).unwrap();

        // Monthly rent of 300000 is out of range over 10 years.
        assert_eq!(change, Change::Subset);
        assert_eq!(filtered(&svc), 1);
        assert!(svc.state().districts().contains(&district("Lisboa")));
        assert!(svc.state().range(Numeric::Price).is_some());
        assert_eq!(svc.state().years().get(), 10);
    }

    #[test]
    fn map_type_redraws_choropleth_only() {
        let mut svc = loaded();

        let change = svc.execute(SetMapType(MapType::Area)).unwrap();

        assert_eq!(change, Change::MapType);
        assert_eq!(svc.views().notified, [view::Kind::Choropleth]);
        assert_eq!(svc.views().choropleths[0].map_type, MapType::Area);

        _ = svc.execute(SetMapType(MapType::Area)).unwrap();
        assert_eq!(svc.state().map_type(), MapType::None);
    }

    #[test]
    fn grouping_redraws_violin() {
        let mut svc = loaded();

        let change =
            svc.execute(SelectViolinGrouping(Grouping::Condition)).unwrap();

        assert_eq!(change, Change::Grouping);
        assert_eq!(
            svc.views().violin_plots[0].grouping,
            Grouping::Condition,
        );
        assert_eq!(
            svc.execute(SelectViolinGrouping(Grouping::Condition)).unwrap(),
            Change::Unchanged,
        );
    }

    #[test]
    fn violin_data_ignores_only_grouped_filter() {
        let mut svc = loaded();
        _ = svc.execute(Toggle::AdsType(AdsType::Rent)).unwrap();
        _ = svc.execute(Toggle::Condition(condition::Kind::Used)).unwrap();
        assert_eq!(filtered(&svc), 0);
        assert!(svc.query(ViolinData).unwrap().is_empty());

        _ = svc.execute(SelectViolinGrouping(Grouping::Condition)).unwrap();

        let violin = svc.query(ViolinData).unwrap();
        assert_eq!(violin.len(), 3);
        assert!(violin.iter().all(|l| l.ads_type == AdsType::Sell));
        assert_eq!(filtered(&svc), 0);
    }

    #[test]
    fn feature_properties_follow_range() {
        let mut svc = loaded();

        _ = svc
            .execute(SetRange::between(Numeric::Area, 100.0, 250.0))
            .unwrap();

        let props = svc.query(DistrictFeatureProperties).unwrap();
        assert_eq!(props.len(), 3);
        assert_eq!(props[0].district, district("Porto"));
        assert_eq!(props[0].count, 1);
        assert_eq!(props[0].area_mean, Some(120.0));
        assert_eq!(props[0].area_quartile, Some(Bucket::Q1));
        assert_eq!(props[1].area_quartile, Some(Bucket::Q4));
        assert_eq!(props[2].district, district("Faro"));
        assert_eq!(props[2].count, 0);
        assert_eq!(props[2].area_mean, None);
        assert_eq!(props[2].area_quartile, None);
    }

    #[test]
    fn axis_extents_span_whole_dataset() {
        let mut svc = loaded();
        _ = svc
            .execute(SetRange::between(Numeric::Area, 100.0, 250.0))
            .unwrap();

        let axes = svc.query(AxisExtents).unwrap();
        let area = axes.area.unwrap();
        assert_eq!((area.min, area.max), (80.0, 300.0));
        assert_eq!(axes.price.unwrap().max, 3_600_000.0);

        _ = svc.execute(SetYears(Years::clamped(10))).unwrap();

        assert_eq!(
            svc.query(AxisExtents).unwrap().price.unwrap().max,
            36_000_000.0,
        );
    }

    #[test]
    fn filters_reflect_state() {
        let mut svc = loaded();
        _ = svc.execute(Toggle::District(district("Porto"))).unwrap();
        _ = svc.execute(SetMapType(MapType::PricePerSquareMeter)).unwrap();

        let filters = svc.query(Filters).unwrap();

        assert_eq!(&filters, svc.state());
        assert!(filters.districts().contains(&district("Porto")));
        assert_eq!(filters.map_type(), MapType::PricePerSquareMeter);
    }

    #[test]
    fn loads_unknown_districts() {
        let mut svc = Service::new(Config::default(), Memory::default());

        _ = svc
            .execute(LoadDataset {
                records: vec![record("Atlantis", AdsType::Sell, 80.0)],
                features: vec![Feature {
                    district: district("Atlantis"),
                    zone: Zone::new("North").unwrap(),
                }],
                baseline: None,
            })
            .unwrap();

        assert_eq!(filtered(&svc), 1);
        let props = svc.query(DistrictFeatureProperties).unwrap();
        assert_eq!(props[0].count, 1);
    }

    #[test]
    fn notifies_every_view_despite_failure() {
        let mut svc = loaded();
        svc.views_mut().fail(view::Kind::ParallelCoordinates);

        let res =
            svc.execute(SetRange::between(Numeric::Area, 100.0, 250.0));

        assert!(res.is_err());
        assert_eq!(
            svc.views().notified,
            [
                view::Kind::ParallelCoordinates,
                view::Kind::ViolinPlot,
                view::Kind::Choropleth,
            ],
        );
        assert_eq!(svc.views().choropleths.len(), 1);
        assert!(svc.state().range(Numeric::Area).is_some());
        assert_eq!(filtered(&svc), 2);
    }

    #[test]
    fn falls_back_to_baseline_breakpoints() {
        let baseline = Breakpoints {
            count: Quartiles::new([1.0, 2.0, 3.0, 4.0]).unwrap(),
            area: Quartiles::new([10.0, 20.0, 30.0, 40.0]).unwrap(),
            price: Quartiles::new([5.0, 6.0, 7.0, 8.0]).unwrap(),
        };
        let mut svc = Service::new(Config::default(), Memory::default());
        _ = svc
            .execute(LoadDataset {
                records: vec![record("Porto", AdsType::Sell, 80.0)],
                features: vec![],
                baseline: Some(baseline),
            })
            .unwrap();
        assert_ne!(svc.query(QuartileBreakpoints).unwrap(), Some(baseline));

        _ = svc
            .execute(SetRange::new(Numeric::Area, Range::new(0.0, 1.0)))
            .unwrap();

        assert_eq!(svc.query(QuartileBreakpoints).unwrap(), Some(baseline));
    }

    #[test]
    fn empty_dataset_degrades_to_empty_views() {
        let mut svc = Service::new(Config::default(), Memory::default());

        _ = svc.execute(Toggle::District(district("Porto"))).unwrap();

        assert_eq!(filtered(&svc), 0);
        assert!(svc.views().parallel_coordinates[0].listings.is_empty());
        assert_eq!(svc.query(QuartileBreakpoints).unwrap(), None);
    }
}
