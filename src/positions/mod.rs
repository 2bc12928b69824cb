//! Built-in positions (compile-time boards with known answers).

use crate::board::{parse_rows, BoardError};
use crate::detect::Occupancy;

#[derive(Debug, Clone, Copy)]
pub struct BuiltInPosition {
    pub name: &'static str,
    pub rows: [&'static str; 7],
    /// Whether White holds a double mill.
    pub double_mill: bool,
}

impl BuiltInPosition {
    pub fn occupancy(&self) -> Result<Occupancy, BoardError> {
        parse_rows(self.rows)
    }
}

const POSITIONS: &[BuiltInPosition] = &[
    BuiltInPosition {
        name: "empty",
        rows: [
            ".......", ".......", ".......", ".......", ".......", ".......", ".......",
        ],
        double_mill: false,
    },
    // Top outer mill; (0,6) swings down to (3,6) and closes the right crossing.
    BuiltInPosition {
        name: "outer_swing",
        rows: [
            "W..W..W", ".......", ".......", "....WW.", ".......", ".......", ".......",
        ],
        double_mill: true,
    },
    // Middle top mill; (1,3) steps out to (0,3) and closes the outer top row.
    BuiltInPosition {
        name: "middle_swing",
        rows: [
            "W.....W", ".W.W.W.", ".......", ".......", ".......", ".......", ".......",
        ],
        double_mill: true,
    },
    // Every point next to the mill is taken.
    BuiltInPosition {
        name: "blocked_mill",
        rows: [
            "W..W..W", "...B...", ".......", "B.....B", ".......", ".......", ".......",
        ],
        double_mill: false,
    },
    // Sliding (0,6) to (3,6) would need (0,6) again for the right column.
    BuiltInPosition {
        name: "vacated_corner",
        rows: [
            "W..W..W", ".......", ".......", ".......", ".......", ".......", "......W",
        ],
        double_mill: false,
    },
    // Black holds the pattern; White has nothing.
    BuiltInPosition {
        name: "black_swing",
        rows: [
            "B..B..B", ".......", ".......", "....BB.", ".......", ".......", ".......",
        ],
        double_mill: false,
    },
];

/// Return a position by name.
pub fn by_name(name: &str) -> Option<&'static BuiltInPosition> {
    POSITIONS.iter().find(|p| p.name == name)
}

/// Names of all built-in positions.
pub fn names() -> Vec<&'static str> {
    POSITIONS.iter().map(|p| p.name).collect()
}

pub fn all() -> &'static [BuiltInPosition] {
    POSITIONS
}
