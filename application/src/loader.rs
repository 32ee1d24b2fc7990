//! Dataset loading from the filesystem.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Deserialize};
use service::{
    command::LoadDataset,
    domain::{
        district::{Breakpoints, Feature},
        listing::{District, Record, Zone},
    },
};
use tracerr::Traced;
use tracing as log;

use crate::config;

/// Loads the whole dataset described by the provided [`config::Dataset`].
///
/// # Errors
///
/// If any of the files cannot be read or parsed, or there are no listings.
pub fn dataset(
    config: &config::Dataset,
) -> Result<LoadDataset, Traced<Error>> {
    let records = listings(&config.listings)?;
    let features = features(&config.districts)?;
    let baseline = config
        .quartiles
        .as_deref()
        .map(baseline)
        .transpose()?;
    Ok(LoadDataset {
        records,
        features,
        baseline,
    })
}

/// Loads listing [`Record`]s from the JSON array at the provided `path`.
///
/// Malformed rows are skipped with a warning.
///
/// # Errors
///
/// If the file cannot be read or parsed as an array, or contains no
/// well-formed records.
pub fn listings(path: &Path) -> Result<Vec<Record>, Traced<Error>> {
    let rows = read_json::<Vec<serde_json::Value>>(path)?;
    let total = rows.len();
    let records = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            serde_json::from_value::<Record>(row)
                .map_err(|e| {
                    log::warn!(
                        "Skipping malformed record #{i} of `{}`: {e}",
                        path.display(),
                    );
                })
                .ok()
        })
        .collect::<Vec<_>>();
    if records.is_empty() {
        return Err(tracerr::new!(Error::NoListings(path.to_owned())));
    }
    log::debug!(
        "Read {} of {total} records from `{}`",
        records.len(),
        path.display(),
    );
    Ok(records)
}

/// Loads district [`Feature`]s from the GeoJSON feature collection at the
/// provided `path`.
///
/// # Errors
///
/// If the file cannot be read or parsed.
pub fn features(path: &Path) -> Result<Vec<Feature>, Traced<Error>> {
    let collection = read_json::<FeatureCollection>(path)?;
    Ok(collection
        .features
        .into_iter()
        .map(|f| Feature {
            district: f.properties.district,
            zone: f.properties.zone,
        })
        .collect())
}

/// Loads baseline [`Breakpoints`] from the JSON file at the provided `path`.
///
/// # Errors
///
/// If the file cannot be read or parsed.
pub fn baseline(path: &Path) -> Result<Breakpoints, Traced<Error>> {
    read_json(path)
}

/// Reads and parses the JSON file at the provided `path`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Traced<Error>> {
    let bytes = fs::read(path)
        .map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })
        .map_err(tracerr::wrap!())?;
    serde_json::from_slice(&bytes)
        .map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })
        .map_err(tracerr::wrap!())
}

/// GeoJSON feature collection, reduced to what the dashboard needs.
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    /// Features of the collection.
    features: Vec<GeoFeature>,
}

/// GeoJSON feature, reduced to its properties.
#[derive(Debug, Deserialize)]
struct GeoFeature {
    /// Properties of the feature.
    properties: Properties,
}

/// Properties of a district GeoJSON feature.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Properties {
    /// [`District`] outlined by the feature.
    district: District,

    /// [`Zone`] of the [`District`].
    zone: Zone,
}

/// Error of loading a dataset.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// File cannot be read.
    #[display("failed to read `{}`: {source}", path.display())]
    Read {
        /// Path to the file.
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// File cannot be parsed.
    #[display("failed to parse `{}`: {source}", path.display())]
    Parse {
        /// Path to the file.
        path: PathBuf,

        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// File has no well-formed listings.
    #[display("no listings in `{}`", _0.display())]
    NoListings(#[error(not(source))] PathBuf),
}
