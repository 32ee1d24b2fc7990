//! Read entities definitions.
//!
//! These are the payloads handed over to view collaborators.

pub mod choropleth;
pub mod parallel_coordinates;
pub mod selection;
pub mod violin;

pub use self::{
    choropleth::Choropleth,
    parallel_coordinates::{Axes, ParallelCoordinates},
    selection::Selection,
    violin::ViolinPlot,
};
