//! Pure numeric statistics.

pub mod density;
pub mod extent;
pub mod quartile;

pub use self::{
    extent::Extent,
    quartile::{classify, quartiles, Bucket, Quartiles},
};

/// Rounds the provided `value` to one decimal place, for display.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
