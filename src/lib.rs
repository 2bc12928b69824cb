//! Double-mill detection for Cowboy Checkers (Nine Men's Morris) positions.
//!
//! - [`topology`]: the fixed board (24 points, 16 mills, slide graph).
//! - [`detect`]: the double-mill search over a position's occupancy.
//! - [`board`]: reading positions from the 7×7 text grid.
//! - [`report`]: serializable query results.

pub mod core;
pub mod topology;
pub mod detect;
pub mod board;
pub mod report;
pub mod positions;
