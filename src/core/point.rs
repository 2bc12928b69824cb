use std::fmt;

use crate::core::coord::{Coord, GRID};

/// Number of legal points on the board.
pub const POINT_COUNT: usize = 24;

/// Grid cells of the legal points, indexed by [`Point`].
///
/// Outer square first, then middle, then inner. Each square lists its corners and
/// midpoints row by row.
const COORDS: [Coord; POINT_COUNT] = [
    // outer
    Coord::new(0, 0),
    Coord::new(0, 3),
    Coord::new(0, 6),
    Coord::new(3, 0),
    Coord::new(3, 6),
    Coord::new(6, 0),
    Coord::new(6, 3),
    Coord::new(6, 6),
    // middle
    Coord::new(1, 1),
    Coord::new(1, 3),
    Coord::new(1, 5),
    Coord::new(3, 1),
    Coord::new(3, 5),
    Coord::new(5, 1),
    Coord::new(5, 3),
    Coord::new(5, 5),
    // inner
    Coord::new(2, 2),
    Coord::new(2, 3),
    Coord::new(2, 4),
    Coord::new(3, 2),
    Coord::new(3, 4),
    Coord::new(4, 2),
    Coord::new(4, 3),
    Coord::new(4, 4),
];

const NO_POINT: u8 = u8::MAX;

/// Dense `row * GRID + col -> point index` table; `NO_POINT` marks cells that are not on the board.
const LOOKUP: [u8; (GRID as usize) * (GRID as usize)] = build_lookup();

const fn build_lookup() -> [u8; (GRID as usize) * (GRID as usize)] {
    let mut table = [NO_POINT; (GRID as usize) * (GRID as usize)];
    let mut i = 0;
    while i < POINT_COUNT {
        let c = COORDS[i];
        table[(c.row as usize) * (GRID as usize) + (c.col as usize)] = i as u8;
        i += 1;
    }
    table
}

/// One of the 24 legal board points.
///
/// Only constructible for legal points, so every `Point` is on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(u8);

impl Point {
    pub const ALL: [Point; POINT_COUNT] = {
        let mut all = [Point(0); POINT_COUNT];
        let mut i = 0;
        while i < POINT_COUNT {
            all[i] = Point(i as u8);
            i += 1;
        }
        all
    };

    /// Point for a raw index, if `index < 24`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Point> {
        (index < POINT_COUNT).then_some(Point(index as u8))
    }

    /// Returns the point at this grid cell if the cell is on the board.
    #[inline]
    pub fn from_coord(coord: Coord) -> Option<Point> {
        if !coord.in_grid() {
            return None;
        }
        let v = LOOKUP[(coord.row as usize) * (GRID as usize) + (coord.col as usize)];
        if v == NO_POINT {
            None
        } else {
            Some(Point(v))
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn coord(self) -> Coord {
        COORDS[self.index()]
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coord();
        write!(f, "Point({}: {},{})", self.0, c.row, c.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_inverts_coords() {
        for p in Point::ALL {
            assert_eq!(Point::from_coord(p.coord()), Some(p));
        }
        let legal = (0..GRID)
            .flat_map(|r| (0..GRID).map(move |c| Coord::new(r, c)))
            .filter(|&c| Point::from_coord(c).is_some())
            .count();
        assert_eq!(legal, POINT_COUNT);
    }

    #[test]
    fn off_board_cells_have_no_point() {
        assert_eq!(Point::from_coord(Coord::new(0, 1)), None);
        assert_eq!(Point::from_coord(Coord::new(3, 3)), None);
        assert_eq!(Point::from_coord(Coord::new(7, 0)), None);
        assert_eq!(Point::from_coord(Coord::new(200, 200)), None);
    }
}
