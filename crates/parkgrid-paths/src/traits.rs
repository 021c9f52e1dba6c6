use parkgrid_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Implementations decide direction order; BFS tie-breaking among
/// equidistant goals follows it.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
