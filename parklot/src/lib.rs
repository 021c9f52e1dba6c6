//! Parklot — a terminal parking-spot finder built on parkgrid.
//!
//! Generates a square lot, asks where you are, and points you at the
//! closest available spot by 4-directional grid distance.

pub mod colors;
pub mod input;
pub mod pather;
pub mod render;

pub use pather::{LotPather, find_nearest_spot};
pub use render::MapView;
