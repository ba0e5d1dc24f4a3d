//! HSL departure boards for the terminal.
//!
//! Looks up public-transit stops by name or number through the Digitransit
//! GraphQL API and renders their upcoming departures as colored tables,
//! optionally refreshing on a fixed interval.

pub mod board;
pub mod digitransit;
pub mod domain;
pub mod render;
