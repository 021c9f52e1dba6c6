//! Single-source BFS with early exit on the nearest goal cell.

use std::collections::VecDeque;

use parkgrid_core::{Point, Range};

use crate::traits::Pather;

/// A position with its BFS distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Reusable search state for a grid rectangle.
///
/// Owns the visited map, the frontier queue, and a neighbor scratch buffer
/// so that repeated queries allocate nothing after the first use. Each call
/// to [`nearest`](Self::nearest) resets the state; nothing leaks between
/// queries.
pub struct SearchRange {
    rng: Range,
    width: usize,
    visited: Vec<bool>,
    frontier: VecDeque<(usize, i32)>,
    nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            visited: vec![false; rng.len()],
            frontier: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Find the goal cell closest to `origin` by unweighted BFS.
    ///
    /// The frontier is seeded with `(origin, 0)` and the origin is marked
    /// visited before any dequeue. Dequeued cells are tested with `is_goal`
    /// first — an origin that is already a goal returns cost 0 — and
    /// non-goal cells expand their `pather` neighbors, each unvisited
    /// in-range neighbor enqueued at cost + 1.
    ///
    /// Because dequeue order is non-decreasing in distance, the returned
    /// cell is a closest goal; ties follow the pather's neighbor order.
    /// Returns `None` when the frontier empties without reaching a goal,
    /// or when `origin` lies outside the range.
    ///
    /// Deterministic: same pather, origin, and goal predicate always yield
    /// the same result. Terminates after at most `range().len()` dequeues.
    pub fn nearest<P: Pather>(
        &mut self,
        pather: &P,
        origin: Point,
        is_goal: impl Fn(Point) -> bool,
    ) -> Option<PathNode> {
        let si = self.idx(origin)?;

        // Reset.
        for v in self.visited.iter_mut() {
            *v = false;
        }
        self.frontier.clear();

        self.visited[si] = true;
        self.frontier.push_back((si, 0));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some((ci, cost)) = self.frontier.pop_front() {
            let cp = self.point(ci);

            if is_goal(cp) {
                found = Some(PathNode { pos: cp, cost });
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.frontier.push_back((ni, cost + 1));
            }
        }

        self.nbuf = nbuf;
        found
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use parkgrid_core::{Lot, Spot};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// 4-neighbor pather over a [`Lot`], up/down/left/right order.
    struct LotPather<'a>(&'a Lot);

    impl Pather for LotPather<'_> {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for d in [
                Point::new(0, -1),
                Point::new(0, 1),
                Point::new(-1, 0),
                Point::new(1, 0),
            ] {
                let n = p + d;
                if self.0.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// Build a lot from an ASCII map: `.` free, `#` occupied.
    fn lot(map: &str) -> Lot {
        let rows = map
            .split_whitespace()
            .map(|line| {
                line.chars()
                    .map(|c| if c == '#' { Spot::Occupied } else { Spot::Free })
                    .collect()
            })
            .collect();
        Lot::from_rows(rows).unwrap()
    }

    fn nearest_free(l: &Lot, origin: Point) -> Option<PathNode> {
        let mut sr = SearchRange::new(l.bounds());
        sr.nearest(&LotPather(l), origin, |p| l.is_free(p))
    }

    #[test]
    fn free_origin_is_found_at_cost_zero() {
        let l = lot(".. ..");
        for p in l.bounds() {
            assert_eq!(nearest_free(&l, p), Some(PathNode { pos: p, cost: 0 }));
        }
        // Free origin wins even when everything else is occupied.
        let l = lot(
            "##
             #.",
        );
        assert_eq!(
            nearest_free(&l, Point::new(1, 1)),
            Some(PathNode {
                pos: Point::new(1, 1),
                cost: 0
            })
        );
    }

    #[test]
    fn ring_of_walls_reaches_center() {
        let l = lot(
            "###
             #.#
             ###",
        );
        assert_eq!(
            nearest_free(&l, Point::new(0, 0)),
            Some(PathNode {
                pos: Point::new(1, 1),
                cost: 2
            })
        );
    }

    #[test]
    fn fully_occupied_finds_nothing() {
        let l = lot("## ##");
        assert_eq!(nearest_free(&l, Point::new(1, 1)), None);

        let l4 = lot("#### #### #### ####");
        for p in l4.bounds() {
            assert_eq!(nearest_free(&l4, p), None, "origin {p}");
        }
    }

    #[test]
    fn out_of_range_origin_finds_nothing() {
        let l = lot(".. ..");
        assert_eq!(nearest_free(&l, Point::new(5, 5)), None);
        assert_eq!(nearest_free(&l, Point::new(-1, 0)), None);
    }

    #[test]
    fn tie_break_follows_neighbor_order() {
        // Free spots above and below the origin, both at distance 1.
        // Up is emitted first, so up wins.
        let l = lot(
            "#.#
             ###
             #.#",
        );
        assert_eq!(
            nearest_free(&l, Point::new(1, 1)),
            Some(PathNode {
                pos: Point::new(1, 0),
                cost: 1
            })
        );
    }

    #[test]
    fn corner_origin_expands_in_bounds_only() {
        let l = lot(
            "##
             #.",
        );
        assert_eq!(
            nearest_free(&l, Point::new(0, 0)),
            Some(PathNode {
                pos: Point::new(1, 1),
                cost: 2
            })
        );
    }

    #[test]
    fn found_cost_is_minimum_manhattan_distance() {
        // Movement is not blocked by occupied spots, so the true shortest
        // 4-directional distance to the nearest free spot is the minimum
        // Manhattan distance over all free spots. Check exhaustively on
        // seeded random lots from every origin.
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let l = Lot::generate(6, 0.7, &mut rng).unwrap();
            for origin in l.bounds() {
                let best = l
                    .iter()
                    .filter(|&(_, s)| s == Spot::Free)
                    .map(|(p, _)| manhattan(origin, p))
                    .min();
                let got = nearest_free(&l, origin);
                match best {
                    None => assert_eq!(got, None),
                    Some(d) => {
                        let node = got.expect("free spot exists");
                        assert_eq!(node.cost, d, "origin {origin}");
                        assert_eq!(manhattan(origin, node.pos), d);
                        assert!(l.is_free(node.pos));
                    }
                }
            }
        }
    }

    #[test]
    fn search_never_mutates_the_lot() {
        let mut rng = StdRng::seed_from_u64(11);
        let l = Lot::generate(8, 0.9, &mut rng).unwrap();
        let before = l.clone();
        let _ = nearest_free(&l, Point::new(3, 3));
        assert_eq!(l, before);
    }

    #[test]
    fn repeated_queries_reuse_state() {
        let l = lot(
            "###
             ###
             #.#",
        );
        let mut sr = SearchRange::new(l.bounds());
        let pather = LotPather(&l);
        let first = sr.nearest(&pather, Point::new(0, 0), |p| l.is_free(p));
        for _ in 0..3 {
            let again = sr.nearest(&pather, Point::new(0, 0), |p| l.is_free(p));
            assert_eq!(again, first);
        }
        assert_eq!(
            first,
            Some(PathNode {
                pos: Point::new(1, 2),
                cost: 3
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
