//! Double-mill detection.
//!
//! A double mill: White holds a complete mill, one of its pieces can slide to an adjacent empty
//! point, and that slide completes a *different* mill. The vacated mill keeps two pieces and can
//! be closed again by sliding back.
//!
//! The search is bounded (16 mills × 3 pieces × ≤4 neighbours × ≤2 second mills) and works on
//! `Copy` bitsets, so simulated moves never touch the caller's occupancy.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::point::Point;
use crate::core::point_set::PointSet;
use crate::topology::{Mill, Topology};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Which points each side holds. Everything else is empty.
///
/// The two sets are expected to be disjoint. If they are not, overlapping points count as
/// occupied and [`Occupancy::owner`] reports White for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Occupancy {
    pub white: PointSet,
    pub black: PointSet,
}

impl Occupancy {
    #[inline]
    pub fn new(white: PointSet, black: PointSet) -> Self {
        Self { white, black }
    }

    /// Build from grid cells. Cells that are not board points are dropped.
    pub fn from_coords<W, B>(white: W, black: B) -> Self
    where
        W: IntoIterator<Item = Coord>,
        B: IntoIterator<Item = Coord>,
    {
        Self {
            white: white.into_iter().filter_map(Point::from_coord).collect(),
            black: black.into_iter().filter_map(Point::from_coord).collect(),
        }
    }

    #[inline]
    pub fn side(&self, side: Side) -> PointSet {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    #[inline]
    pub fn occupied(&self) -> PointSet {
        self.white.union(self.black)
    }

    #[inline]
    pub fn empty(&self) -> PointSet {
        self.occupied().complement()
    }

    pub fn owner(&self, p: Point) -> Option<Side> {
        if self.white.contains(p) {
            Some(Side::White)
        } else if self.black.contains(p) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// The occupancy with colours exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            white: self.black,
            black: self.white,
        }
    }

    /// Run the detector for either side.
    pub fn double_mill_for(&self, side: Side, topology: &Topology) -> Option<DoubleMill> {
        let mover = self.side(side);
        let opponent = self.side(side.other());
        find_double_mill(mover, opponent, topology)
    }
}

/// A witness: sliding `from` (a member of complete `mill`) to the empty point `to` completes
/// `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleMill {
    pub mill: Mill,
    pub from: Point,
    pub to: Point,
    pub second: Mill,
}

/// Mills whose three points are all in `pieces`, in table order.
pub fn complete_mills(pieces: PointSet, topology: &Topology) -> Vec<Mill> {
    topology
        .mills()
        .filter(|&m| pieces.is_superset(topology.mill_set(m)))
        .collect()
}

/// Whether `white` holds a double mill against `black`.
pub fn has_double_mill(white: PointSet, black: PointSet, topology: &Topology) -> bool {
    find_double_mill(white, black, topology).is_some()
}

/// First double-mill witness in search order, if any.
///
/// Order: mills in table order, pieces in mill order, target points ascending, second mills in
/// table order.
pub fn find_double_mill(
    white: PointSet,
    black: PointSet,
    topology: &Topology,
) -> Option<DoubleMill> {
    let mut found = None;
    search(white, black, topology, |w| {
        found = Some(w);
        false
    });
    found
}

/// Every double-mill witness, in search order.
pub fn double_mills(white: PointSet, black: PointSet, topology: &Topology) -> Vec<DoubleMill> {
    let mut out = Vec::new();
    search(white, black, topology, |w| {
        out.push(w);
        true
    });
    out
}

/// Drive `visit` over witnesses until it returns `false`.
fn search(
    white: PointSet,
    black: PointSet,
    topology: &Topology,
    mut visit: impl FnMut(DoubleMill) -> bool,
) {
    let occupied = white.union(black);

    for mill in topology.mills() {
        if !white.is_superset(topology.mill_set(mill)) {
            continue;
        }
        for from in topology.mill_points(mill) {
            let targets = topology.neighbors(from).difference(occupied);
            for to in targets {
                let after = white.without(from).with(to);
                for &second in topology.mills_containing(to) {
                    if second == mill {
                        continue;
                    }
                    if after.is_superset(topology.mill_set(second)) {
                        let witness = DoubleMill {
                            mill,
                            from,
                            to,
                            second,
                        };
                        if !visit(witness) {
                            return;
                        }
                    }
                }
            }
        }
    }
}
