//! The fixed board: legal points, the 16 canonical mills, and the slide graph.
//!
//! The tables are plain constants. [`Topology`] adds derived lookups (mill bitsets and a
//! per-point mill index) and validates everything once when it is built.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use crate::core::coord::Coord;
use crate::core::point::{Point, POINT_COUNT};
use crate::core::point_set::PointSet;

pub const MILL_COUNT: usize = 16;

/// Canonical mills as grid cells.
const MILL_CELLS: [[(u8, u8); 3]; MILL_COUNT] = [
    // outer square
    [(0, 0), (0, 3), (0, 6)],
    [(6, 0), (6, 3), (6, 6)],
    [(0, 0), (3, 0), (6, 0)],
    [(0, 6), (3, 6), (6, 6)],
    // middle square
    [(1, 1), (1, 3), (1, 5)],
    [(5, 1), (5, 3), (5, 5)],
    [(1, 1), (3, 1), (5, 1)],
    [(1, 5), (3, 5), (5, 5)],
    // inner square
    [(2, 2), (2, 3), (2, 4)],
    [(4, 2), (4, 3), (4, 4)],
    [(2, 2), (3, 2), (4, 2)],
    [(2, 4), (3, 4), (4, 4)],
    // crossings through the midpoints
    [(0, 3), (1, 3), (2, 3)],
    [(4, 3), (5, 3), (6, 3)],
    [(3, 0), (3, 1), (3, 2)],
    [(3, 4), (3, 5), (3, 6)],
];

/// Undirected slide edges as grid cells. Each edge is listed once.
const EDGE_CELLS: [((u8, u8), (u8, u8)); 32] = [
    // outer square
    ((0, 0), (0, 3)),
    ((0, 3), (0, 6)),
    ((0, 6), (3, 6)),
    ((3, 6), (6, 6)),
    ((6, 6), (6, 3)),
    ((6, 3), (6, 0)),
    ((6, 0), (3, 0)),
    ((3, 0), (0, 0)),
    // middle square
    ((1, 1), (1, 3)),
    ((1, 3), (1, 5)),
    ((1, 5), (3, 5)),
    ((3, 5), (5, 5)),
    ((5, 5), (5, 3)),
    ((5, 3), (5, 1)),
    ((5, 1), (3, 1)),
    ((3, 1), (1, 1)),
    // inner square
    ((2, 2), (2, 3)),
    ((2, 3), (2, 4)),
    ((2, 4), (3, 4)),
    ((3, 4), (4, 4)),
    ((4, 4), (4, 3)),
    ((4, 3), (4, 2)),
    ((4, 2), (3, 2)),
    ((3, 2), (2, 2)),
    // crossings
    ((0, 3), (1, 3)),
    ((1, 3), (2, 3)),
    ((4, 3), (5, 3)),
    ((5, 3), (6, 3)),
    ((3, 0), (3, 1)),
    ((3, 1), (3, 2)),
    ((3, 4), (3, 5)),
    ((3, 5), (3, 6)),
];

/// Identifier of a canonical mill (0..16, in table order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mill(u8);

impl Mill {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read-only board topology.
///
/// Use [`Topology::standard`] for the shared instance.
#[derive(Debug, Clone)]
pub struct Topology {
    mill_points: [[Point; 3]; MILL_COUNT],
    mill_sets: [PointSet; MILL_COUNT],
    neighbors: [PointSet; POINT_COUNT],
    mills_by_point: Vec<Vec<Mill>>,
    edge_count: usize,
}

static STANDARD: OnceLock<Topology> = OnceLock::new();

impl Topology {
    /// The process-wide topology, built on first use.
    pub fn standard() -> &'static Topology {
        STANDARD.get_or_init(Topology::new)
    }

    /// Build and validate the tables.
    ///
    /// Panics if the constant tables are malformed; that is a bug, not an input error.
    pub fn new() -> Self {
        let mut mill_points = [[Point::ALL[0]; 3]; MILL_COUNT];
        let mut mill_sets = [PointSet::EMPTY; MILL_COUNT];
        for (i, cells) in MILL_CELLS.iter().enumerate() {
            for (j, &cell) in cells.iter().enumerate() {
                mill_points[i][j] = table_point(cell, "mill");
            }
            mill_sets[i] = mill_points[i].iter().copied().collect();
        }

        let mut neighbors = [PointSet::EMPTY; POINT_COUNT];
        for &(a, b) in EDGE_CELLS.iter() {
            let (a, b) = (table_point(a, "edge"), table_point(b, "edge"));
            neighbors[a.index()].insert(b);
            neighbors[b.index()].insert(a);
        }

        let mut mills_by_point = vec![Vec::new(); POINT_COUNT];
        for (i, set) in mill_sets.iter().enumerate() {
            for p in set.iter() {
                mills_by_point[p.index()].push(Mill(i as u8));
            }
        }

        let topology = Self {
            mill_points,
            mill_sets,
            neighbors,
            mills_by_point,
            edge_count: EDGE_CELLS.len(),
        };
        topology.validate();
        topology
    }

    fn validate(&self) {
        let mut seen: FxHashSet<PointSet> = FxHashSet::default();
        for m in self.mills() {
            let set = self.mill_set(m);
            assert_eq!(set.len(), 3, "mill {} does not have 3 distinct points", m.index());
            assert!(seen.insert(set), "mill {} is listed twice", m.index());
        }

        let mut edges: FxHashSet<(Point, Point)> = FxHashSet::default();
        for p in Point::ALL {
            let ns = self.neighbors(p);
            assert!(!ns.contains(p), "{p:?} is adjacent to itself");
            assert!(
                (2..=4).contains(&ns.len()),
                "{p:?} has degree {} (expected 2..=4)",
                ns.len()
            );
            for q in ns {
                assert!(self.neighbors(q).contains(p), "edge {p:?}-{q:?} is not symmetric");
                edges.insert((p.min(q), p.max(q)));
            }
        }
        assert_eq!(edges.len(), self.edge_count, "duplicate edge in the slide table");
    }

    /// All canonical mills in table order.
    pub fn mills(&self) -> impl Iterator<Item = Mill> {
        (0..MILL_COUNT as u8).map(Mill)
    }

    #[inline]
    pub fn mill_points(&self, m: Mill) -> [Point; 3] {
        self.mill_points[m.index()]
    }

    #[inline]
    pub fn mill_set(&self, m: Mill) -> PointSet {
        self.mill_sets[m.index()]
    }

    /// Every canonical mill through `p`, in table order.
    #[inline]
    pub fn mills_containing(&self, p: Point) -> &[Mill] {
        &self.mills_by_point[p.index()]
    }

    /// Points reachable from `p` by a single slide.
    #[inline]
    pub fn neighbors(&self, p: Point) -> PointSet {
        self.neighbors[p.index()]
    }

    #[inline]
    pub fn are_adjacent(&self, a: Point, b: Point) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Whether `coord` is one of the 24 board points.
    #[inline]
    pub fn is_legal(&self, coord: Coord) -> bool {
        Point::from_coord(coord).is_some()
    }

    #[inline]
    pub fn point_at(&self, coord: Coord) -> Option<Point> {
        Point::from_coord(coord)
    }

    /// Number of undirected slide edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

fn table_point((row, col): (u8, u8), table: &str) -> Point {
    Point::from_coord(Coord::new(row, col))
        .unwrap_or_else(|| panic!("{table} table references off-board cell ({row},{col})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_follow_board_roles() {
        let t = Topology::new();
        let degree = |r, c| t.neighbors(Point::from_coord(Coord::new(r, c)).unwrap()).len();
        assert_eq!(degree(0, 0), 2);
        assert_eq!(degree(0, 3), 3);
        assert_eq!(degree(1, 3), 4);
        assert_eq!(degree(2, 3), 3);
        assert_eq!(degree(4, 4), 2);
    }
}
