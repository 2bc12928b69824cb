//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: cells of the 7×7 grid the board is drawn on.
//! - [`point`]: the 24 legal points as compact indices, with a dense grid lookup.
//! - [`point_set`]: a `u32` bitset of points, used for occupancy and mill membership tests.

pub mod coord;
pub mod point;
pub mod point_set;
