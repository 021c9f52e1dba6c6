//! **parkgrid-core** — core types for parking-grid search.
//!
//! This crate provides the foundational, I/O-free types shared across the
//! *parkgrid* workspace: geometry primitives, the occupancy [`Lot`], and a
//! medium-independent [`Color`] so that rendering backends stay out of the
//! core layers.

pub mod geom;
pub mod lot;
pub mod style;

pub use geom::{Point, Range};
pub use lot::{Lot, LotError, Spot};
pub use style::Color;
