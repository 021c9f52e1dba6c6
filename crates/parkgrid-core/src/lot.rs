//! The parking-lot occupancy grid.
//!
//! [`Lot`] is a fixed-size square matrix of [`Spot`] values. It is built
//! once (from a generator or explicit rows) and is read-only afterwards:
//! nothing in the workspace mutates a lot after construction.

use std::error::Error;
use std::fmt;

use rand::{Rng, RngExt};

use crate::geom::{Point, Range, RangeIter};

/// Occupancy state of a single parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spot {
    /// The spot is available.
    #[default]
    Free,
    /// The spot is taken.
    Occupied,
}

/// Error building a [`Lot`] from external data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotError {
    /// Zero rows, or a requested size below 1.
    EmptyLot,
    /// A row's length does not match the number of rows.
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for LotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotError::EmptyLot => write!(f, "lot must have at least one row"),
            LotError::NotSquare { row, expected, got } => write!(
                f,
                "lot must be square: row {row} has {got} spots, expected {expected}"
            ),
        }
    }
}

impl Error for LotError {}

/// A square grid of parking spots, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    spots: Vec<Spot>,
    bounds: Range,
}

impl Lot {
    /// Create an all-[`Spot::Free`] lot of the given side length.
    pub fn new(size: i32) -> Result<Self, LotError> {
        if size < 1 {
            return Err(LotError::EmptyLot);
        }
        Ok(Self {
            spots: vec![Spot::Free; (size * size) as usize],
            bounds: Range::new(0, 0, size, size),
        })
    }

    /// Build a lot from explicit rows of spots.
    ///
    /// The input must be square: as many columns in every row as there are
    /// rows. Rejects empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<Spot>>) -> Result<Self, LotError> {
        let n = rows.len();
        if n == 0 {
            return Err(LotError::EmptyLot);
        }
        let mut spots = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(LotError::NotSquare {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            spots.extend(row);
        }
        Ok(Self {
            spots,
            bounds: Range::new(0, 0, n as i32, n as i32),
        })
    }

    /// Generate a lot where each spot is independently [`Spot::Occupied`]
    /// with probability `occupancy` (clamped to `[0, 1]`).
    ///
    /// The random source is passed in explicitly so callers control
    /// seeding; there is no hidden process-wide generator.
    pub fn generate(size: i32, occupancy: f64, rng: &mut impl Rng) -> Result<Self, LotError> {
        let mut lot = Self::new(size)?;
        let occupancy = occupancy.clamp(0.0, 1.0);
        for spot in lot.spots.iter_mut() {
            if rng.random_bool(occupancy) {
                *spot = Spot::Occupied;
            }
        }
        Ok(lot)
    }

    /// Side length of the lot.
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.width()
    }

    /// The bounding range, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether the point lies inside the lot.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The spot at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Spot> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.spots[(p.y * self.size() + p.x) as usize])
    }

    /// Whether the spot at `p` is in bounds and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(Spot::Free)
    }

    /// Count spots equal to the given state.
    pub fn count(&self, spot: Spot) -> usize {
        self.spots.iter().filter(|&&s| s == spot).count()
    }

    /// Iterate over `(Point, Spot)` pairs in row-major order.
    pub fn iter(&self) -> LotIter<'_> {
        LotIter {
            lot: self,
            points: self.bounds.iter(),
        }
    }
}

/// Iterator over the `(Point, Spot)` pairs of a [`Lot`].
pub struct LotIter<'a> {
    lot: &'a Lot,
    points: RangeIter,
}

impl Iterator for LotIter<'_> {
    type Item = (Point, Spot);

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.points.next()?;
        Some((p, self.lot.spots[(p.y * self.lot.size() + p.x) as usize]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for LotIter<'_> {}

impl<'a> IntoIterator for &'a Lot {
    type Item = (Point, Spot);
    type IntoIter = LotIter<'a>;

    fn into_iter(self) -> LotIter<'a> {
        self.iter()
    }
}
