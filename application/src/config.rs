//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::filter::Years;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub dataset: Dataset,

    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Dataset configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Dataset {
    /// Path to the JSON array of listings.
    #[default(PathBuf::from("data/final_dataset.json"))]
    pub listings: PathBuf,

    /// Path to the GeoJSON collection of district features.
    #[default(PathBuf::from("data/districts.geojson"))]
    pub districts: PathBuf,

    /// Path to the JSON file of baseline quartile breakpoints, if any.
    pub quartiles: Option<PathBuf>,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Horizon, in years, rent prices are initially brought to.
    #[default(1)]
    pub default_years: i64,

    /// Duration a single pipeline run is expected to fit in.
    #[default(time::Duration::from_millis(16))]
    #[serde(with = "humantime_serde")]
    pub frame_budget: time::Duration,

    /// Violin plot configuration.
    pub violin: Violin,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            default_years,
            frame_budget,
            violin: Violin { bandwidth, ticks },
        } = value;
        Self {
            default_years: Years::clamped(default_years),
            frame_budget,
            violin: service::read::violin::Config { bandwidth, ticks },
        }
    }
}

/// Violin plot configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Violin {
    /// Bandwidth of the price density kernel, in euros.
    #[default(200.0)]
    pub bandwidth: f64,

    /// Approximate number of points the price density is evaluated at.
    #[default(50)]
    pub ticks: usize,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
