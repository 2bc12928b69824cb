use serde::{Deserialize, Serialize};

/// Side length of the square grid the board is drawn on.
pub const GRID: u8 = 7;

/// A cell of the 7×7 grid, row 0 at the top.
///
/// Most cells are not board points; see [`crate::core::point::Point::from_coord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_grid(self) -> bool {
        self.row < GRID && self.col < GRID
    }
}

impl From<(u8, u8)> for Coord {
    #[inline]
    fn from((row, col): (u8, u8)) -> Self {
        Coord::new(row, col)
    }
}
