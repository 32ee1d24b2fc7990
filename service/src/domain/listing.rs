//! [`Listing`] definitions.

use std::{convert::Infallible, rc::Rc, str::FromStr};

use common::define_kind;
use derive_more::{AsRef, Deref, Display, Error};
use serde::{Deserialize, Serialize};

use crate::domain::filter::{Numeric, Years};

/// Area of a [`Listing`], in square meters.
pub type Area = f64;

/// Price of a [`Listing`], in euros.
pub type Price = f64;

/// Number of rooms in a [`Listing`].
pub type Rooms = u16;

/// Number of bathrooms in a [`Listing`].
pub type Bathrooms = u16;

/// Property ad for rent or sale, exactly as it was advertised.
///
/// Never mutated once loaded: every horizon-dependent figure lives in a
/// [`Priced`] listing instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// Usable area of this [`Listing`].
    pub area: Area,

    /// Number of rooms of this [`Listing`].
    pub rooms: Rooms,

    /// Number of bathrooms of this [`Listing`].
    pub bathrooms: Bathrooms,

    /// Advertised price of this [`Listing`].
    ///
    /// Monthly for [`AdsType::Rent`], total for [`AdsType::Sell`].
    pub listed_price: Price,

    /// [`District`] this [`Listing`] is located in.
    pub district: District,

    /// [`Zone`] this [`Listing`] is located in.
    pub zone: Zone,

    /// [`AdsType`] of this [`Listing`].
    pub ads_type: AdsType,

    /// [`Condition`] of the advertised property.
    pub condition: Condition,

    /// Price per square meter, as it was loaded.
    pub price_per_square_meter: Price,
}

impl TryFrom<Record> for Listing {
    type Error = InvalidRecord;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        use InvalidRecord as E;

        let Record {
            area,
            rooms,
            bathrooms,
            price,
            district,
            zone,
            ads_type,
            condition,
            price_per_square_meter,
        } = record;

        if !(area.is_finite() && area > 0.0) {
            return Err(E::Area(area));
        }
        if !(price.is_finite() && price >= 0.0) {
            return Err(E::Price(price));
        }
        if !(price_per_square_meter.is_finite()
            && price_per_square_meter >= 0.0)
        {
            return Err(E::PricePerSquareMeter(price_per_square_meter));
        }

        Ok(Self {
            area,
            rooms: count(rooms).ok_or(E::Rooms(rooms))?,
            bathrooms: count(bathrooms).ok_or(E::Bathrooms(bathrooms))?,
            listed_price: price,
            zone: Zone::new(zone.as_str()).ok_or(E::Zone(zone))?,
            district: District::new(district.as_str())
                .ok_or(E::District(district))?,
            ads_type,
            condition: condition.into(),
            price_per_square_meter,
        })
    }
}

/// Converts the provided loosely typed `value` into a non-negative integer
/// count, if it represents one.
fn count(value: f64) -> Option<u16> {
    (value.is_finite()
        && value >= 0.0
        && value.fract() == 0.0
        && value <= f64::from(u16::MAX))
    .then(|| {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "checked to be a non-negative integer within `u16`"
        )]
        let count = value as u16;
        count
    })
}

/// Loosely typed dataset record, as it travels over the wire.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Area, in square meters.
    pub area: f64,

    /// Number of rooms, possibly encoded as a float.
    pub rooms: f64,

    /// Number of bathrooms, possibly encoded as a float.
    pub bathrooms: f64,

    /// Price, in euros.
    pub price: f64,

    /// District name.
    pub district: String,

    /// Zone name.
    pub zone: String,

    /// [`AdsType`] of the ad.
    pub ads_type: AdsType,

    /// Free-form condition of the property.
    pub condition: String,

    /// Price per square meter.
    pub price_per_square_meter: f64,
}

impl From<Priced> for Record {
    fn from(priced: Priced) -> Self {
        let Priced {
            listing,
            price,
            price_per_square_meter,
        } = priced;
        Self {
            area: listing.area,
            rooms: f64::from(listing.rooms),
            bathrooms: f64::from(listing.bathrooms),
            price,
            district: listing.district.to_string(),
            zone: listing.zone.to_string(),
            ads_type: listing.ads_type,
            condition: listing.condition.to_string(),
            price_per_square_meter,
        }
    }
}

/// Error of converting a [`Record`] into a [`Listing`].
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum InvalidRecord {
    /// Area is not positive.
    #[display("`Area` must be positive, got {_0}")]
    Area(#[error(not(source))] f64),

    /// Number of rooms is not a non-negative integer.
    #[display("`Rooms` must be a non-negative integer, got {_0}")]
    Rooms(#[error(not(source))] f64),

    /// Number of bathrooms is not a non-negative integer.
    #[display("`Bathrooms` must be a non-negative integer, got {_0}")]
    Bathrooms(#[error(not(source))] f64),

    /// Price is negative or not a number.
    #[display("`Price` must be non-negative, got {_0}")]
    Price(#[error(not(source))] f64),

    /// Price per square meter is negative or not a number.
    #[display("`PricePerSquareMeter` must be non-negative, got {_0}")]
    PricePerSquareMeter(#[error(not(source))] f64),

    /// District name is malformed.
    #[display("invalid `District`: `{_0}`")]
    District(#[error(not(source))] String),

    /// Zone name is malformed.
    #[display("invalid `Zone`: `{_0}`")]
    Zone(#[error(not(source))] String),
}

/// [`Listing`] with its price brought to the active horizon, so that rent and
/// sale prices are comparable.
#[derive(Clone, Debug, Deref, PartialEq, Serialize)]
#[serde(into = "Record")]
pub struct Priced {
    /// Underlying [`Listing`].
    #[deref(forward)]
    listing: Rc<Listing>,

    /// Effective price of the [`Listing`] over the horizon.
    pub price: Price,

    /// Effective price per square meter of the [`Listing`].
    pub price_per_square_meter: Price,
}

impl Priced {
    /// Prices the provided [`Listing`] over the given [`Years`] horizon.
    ///
    /// Rent is multiplied by `years × 12` months, sale prices are kept as is.
    #[must_use]
    pub fn new(listing: Rc<Listing>, years: Years) -> Self {
        let (price, price_per_square_meter) = match listing.ads_type {
            AdsType::Rent => {
                let price = listing.listed_price * years.rent_multiplier();
                (price, price / listing.area)
            }
            AdsType::Sell => {
                (listing.listed_price, listing.price_per_square_meter)
            }
        };
        Self {
            listing,
            price,
            price_per_square_meter,
        }
    }

    /// Returns the underlying [`Listing`].
    #[must_use]
    pub fn listing(&self) -> &Rc<Listing> {
        &self.listing
    }

    /// Returns the value of the provided [`Numeric`] dimension.
    #[must_use]
    pub fn value(&self, dimension: Numeric) -> f64 {
        match dimension {
            Numeric::Rooms => f64::from(self.rooms),
            Numeric::Bathrooms => f64::from(self.bathrooms),
            Numeric::Area => self.area,
            Numeric::Price => self.price,
        }
    }
}

define_kind! {
    #[doc = "Type of a [`Listing`] ad."]
    enum AdsType {
        #[doc = "Property is offered for rent."]
        Rent,

        #[doc = "Property is offered for sale."]
        Sell,
    }
}

/// Condition of a [`Listing`] property.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Condition {
    /// Brand new property.
    New,

    /// Renovated property.
    Renovated,

    /// Used property.
    Used,

    /// Any other condition, kept verbatim.
    Other(String),
}

impl Condition {
    /// Returns [`condition::Kind`] of this [`Condition`].
    #[must_use]
    pub fn kind(&self) -> condition::Kind {
        match self {
            Self::New => condition::Kind::New,
            Self::Renovated => condition::Kind::Renovated,
            Self::Used => condition::Kind::Used,
            Self::Other(_) => condition::Kind::Others,
        }
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => Self::New,
            "Renovated" => Self::Renovated,
            "Used" => Self::Used,
            _ => Self::Other(s),
        }
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.to_owned().into())
    }
}

pub mod condition {
    //! [`Condition`] filtering definitions.

    use common::define_kind;

    #[cfg(doc)]
    use super::Condition;

    define_kind! {
        #[doc = "Bucket of a [`Condition`] used for filtering."]
        enum Kind {
            #[doc = "[`Condition::New`] properties."]
            New,

            #[doc = "[`Condition::Renovated`] properties."]
            Renovated,

            #[doc = "[`Condition::Used`] properties."]
            Used,

            #[doc = "Properties of any [`Condition::Other`] condition."]
            Others,
        }
    }
}

/// District a [`Listing`] is located in.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(into = "String", try_from = "String")]
pub struct District(String);

impl District {
    /// Names of the 18 districts of mainland Portugal.
    pub const KNOWN: [&'static str; 18] = [
        "Aveiro",
        "Beja",
        "Braga",
        "Bragança",
        "Castelo Branco",
        "Coimbra",
        "Évora",
        "Faro",
        "Guarda",
        "Leiria",
        "Lisboa",
        "Portalegre",
        "Porto",
        "Santarém",
        "Setúbal",
        "Viana do Castelo",
        "Vila Real",
        "Viseu",
    ];

    /// Creates a new [`District`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Indicates whether this [`District`] is one of the [`District::KNOWN`]
    /// ones.
    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// Checks whether the given `name` is a valid [`District`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for District {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `District`")
    }
}

impl TryFrom<String> for District {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `District`")
    }
}

impl From<District> for String {
    fn from(district: District) -> Self {
        district.0
    }
}

/// Macro-region (North, Centre, South, ...) grouping several [`District`]s.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
#[serde(into = "String", try_from = "String")]
pub struct Zone(String);

impl Zone {
    /// Creates a new [`Zone`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Zone`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Zone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Zone`")
    }
}

impl TryFrom<String> for Zone {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Zone`")
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

#[cfg(test)]
mod spec {
    use std::rc::Rc;

    use crate::domain::filter::{Numeric, Years};

    use super::{
        condition, AdsType, Condition, District, InvalidRecord, Listing,
        Priced, Record,
    };

    fn record(ads_type: AdsType, price: f64) -> Record {
        Record {
            area: 100.0,
            rooms: 2.0,
            bathrooms: 1.0,
            price,
            district: "Porto".to_owned(),
            zone: "North".to_owned(),
            ads_type,
            condition: "Used".to_owned(),
            price_per_square_meter: price / 100.0,
        }
    }

    fn listing(ads_type: AdsType, price: f64) -> Rc<Listing> {
        Rc::new(Listing::try_from(record(ads_type, price)).unwrap())
    }

    #[test]
    fn scales_rent_by_horizon() {
        let priced =
            Priced::new(listing(AdsType::Rent, 1000.0), Years::clamped(10));

        assert_eq!(priced.price, 120_000.0);
        assert_eq!(priced.price_per_square_meter, 1200.0);
        assert_eq!(priced.listed_price, 1000.0);
    }

    #[test]
    fn keeps_sale_price() {
        let listing = listing(AdsType::Sell, 250_000.0);

        for years in [1, 10, 99] {
            let priced = Priced::new(Rc::clone(&listing), Years::clamped(years));

            assert_eq!(priced.price, 250_000.0);
            assert_eq!(priced.price_per_square_meter, 2500.0);
        }
    }

    #[test]
    fn exposes_numeric_values() {
        let priced = Priced::new(listing(AdsType::Sell, 9.0), Years::MIN);

        assert_eq!(priced.value(Numeric::Rooms), 2.0);
        assert_eq!(priced.value(Numeric::Bathrooms), 1.0);
        assert_eq!(priced.value(Numeric::Area), 100.0);
        assert_eq!(priced.value(Numeric::Price), 9.0);
    }

    #[test]
    fn validates_records() {
        let mut bad = record(AdsType::Sell, 1.0);
        bad.area = 0.0;
        assert_eq!(Listing::try_from(bad), Err(InvalidRecord::Area(0.0)));

        let mut bad = record(AdsType::Sell, 1.0);
        bad.rooms = 2.5;
        assert_eq!(Listing::try_from(bad), Err(InvalidRecord::Rooms(2.5)));

        let mut bad = record(AdsType::Sell, 1.0);
        bad.bathrooms = -1.0;
        assert_eq!(
            Listing::try_from(bad),
            Err(InvalidRecord::Bathrooms(-1.0)),
        );

        let mut bad = record(AdsType::Sell, 1.0);
        bad.district = " Porto".to_owned();
        assert_eq!(
            Listing::try_from(bad),
            Err(InvalidRecord::District(" Porto".to_owned())),
        );

        assert!(Listing::try_from(record(AdsType::Rent, 0.0)).is_ok());
    }

    #[test]
    fn buckets_conditions() {
        assert_eq!(Condition::from("New".to_owned()).kind(), condition::Kind::New);
        assert_eq!(
            Condition::from("Unknown".to_owned()).kind(),
            condition::Kind::Others,
        );
        assert_eq!(
            Condition::from("Unknown".to_owned()).to_string(),
            "Unknown",
        );
        assert_eq!(Condition::Renovated.to_string(), "Renovated");
    }

    #[test]
    fn knows_portuguese_districts() {
        assert!(District::new("Lisboa").unwrap().is_known());
        assert!(District::new("Évora").unwrap().is_known());
        assert!(!District::new("Madrid").unwrap().is_known());
        assert!(District::new("").is_none());
    }

    #[test]
    fn serializes_priced_as_record() {
        let priced =
            Priced::new(listing(AdsType::Rent, 1000.0), Years::clamped(2));

        let record = Record::from(priced);

        assert_eq!(record.price, 24_000.0);
        assert_eq!(record.district, "Porto");
        assert_eq!(record.condition, "Used");
        assert_eq!(record.rooms, 2.0);
    }
}
