//! Domain definitions.

pub mod district;
pub mod filter;
pub mod listing;

pub use self::{
    district::{Aggregate, Aggregates, Breakpoints, Feature},
    filter::State,
    listing::{Listing, Priced},
};
