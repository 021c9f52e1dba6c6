//! Breadth-first nearest-goal search over 2D grids.
//!
//! The central type is [`SearchRange`]: it owns the visited map and the
//! frontier queue for a grid rectangle and reuses them across queries, so
//! repeated searches incur no allocations after warm-up.
//!
//! [`SearchRange::nearest`] runs an unweighted BFS from a single origin and
//! returns the first goal cell dequeued. Because BFS dequeues in
//! non-decreasing distance order, that cell is a closest goal; ties among
//! equidistant goals are broken by the neighbor order the [`Pather`] emits.
//!
//! Neighbor enumeration is abstracted behind [`Pather`] (same shape as a
//! map type would implement for any grid traversal), keeping this crate
//! free of occupancy semantics and I/O.

mod bfs;
mod distance;
mod traits;

pub use bfs::{PathNode, SearchRange};
pub use distance::manhattan;
pub use traits::Pather;
