//! Neighbor enumeration over a [`Lot`] and the spot-search entry point.

use parkgrid_core::{Lot, Point};
use parkgrid_paths::{PathNode, Pather, SearchRange};

/// 4-directional [`Pather`] over a parking lot.
///
/// Emits in-bounds neighbors in the fixed order up, down, left, right.
/// The order decides which of several equidistant free spots the search
/// returns, so changing it changes tie-breaking.
pub struct LotPather<'a> {
    lot: &'a Lot,
}

impl<'a> LotPather<'a> {
    pub fn new(lot: &'a Lot) -> Self {
        Self { lot }
    }
}

impl Pather for LotPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in [
            Point::new(0, -1),
            Point::new(0, 1),
            Point::new(-1, 0),
            Point::new(1, 0),
        ] {
            let n = p + d;
            if self.lot.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Find the free spot closest to `origin`, or `None` if the lot is full.
///
/// The origin itself counts: a free origin comes back at distance 0.
pub fn find_nearest_spot(lot: &Lot, origin: Point) -> Option<PathNode> {
    let mut sr = SearchRange::new(lot.bounds());
    sr.nearest(&LotPather::new(lot), origin, |p| lot.is_free(p))
}
