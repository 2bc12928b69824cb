//! Text boards: seven rows of seven characters, row 0 on top.
//!
//! Only the 24 board points are read. `W` and `B` mark pieces; any other character (or a
//! missing one at the end of a short row) is empty.

use std::fmt;
use std::io::BufRead;

use crate::core::coord::{Coord, GRID};
use crate::core::point::Point;
use crate::core::point_set::PointSet;
use crate::detect::Occupancy;

#[derive(Debug)]
pub enum BoardError {
    /// Input ended before all seven rows were read.
    MissingRows { found: usize },
    /// Reading the input failed.
    Io { stage: &'static str, error: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingRows { found } => {
                write!(f, "board needs {GRID} rows, got {found}")
            }
            BoardError::Io { stage, error } => write!(f, "io error at {stage}: {error}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Parse the first seven rows. Extra rows are ignored.
pub fn parse_rows<I, S>(rows: I) -> Result<Occupancy, BoardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut white = PointSet::EMPTY;
    let mut black = PointSet::EMPTY;
    let mut found = 0usize;

    for (row, line) in rows.into_iter().take(GRID as usize).enumerate() {
        found += 1;
        let line = line.as_ref();
        let line = line.strip_suffix('\r').unwrap_or(line);
        let cells: Vec<char> = line.chars().take(GRID as usize).collect();

        for col in 0..GRID {
            let Some(p) = Point::from_coord(Coord::new(row as u8, col)) else {
                continue;
            };
            match cells.get(col as usize).copied() {
                Some('W') => white.insert(p),
                Some('B') => black.insert(p),
                _ => {}
            }
        }
    }

    if found < GRID as usize {
        return Err(BoardError::MissingRows { found });
    }
    Ok(Occupancy::new(white, black))
}

pub fn parse_board(text: &str) -> Result<Occupancy, BoardError> {
    parse_rows(text.lines())
}

/// Read a board from a buffered reader (e.g. locked stdin).
pub fn read_board<R: BufRead>(reader: R) -> Result<Occupancy, BoardError> {
    let mut rows = Vec::with_capacity(GRID as usize);
    for line in reader.lines().take(GRID as usize) {
        let line = line.map_err(|e| BoardError::Io {
            stage: "read_board",
            error: e.to_string(),
        })?;
        rows.push(line);
    }
    parse_rows(rows)
}
