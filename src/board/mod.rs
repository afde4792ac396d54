//! Board storage and snapshots.
//!
//! - `Board`: occupancy of every cell, no rules attached
//! - `Snapshot`: wire/persistence form of a position

#[allow(clippy::module_inception)]
mod board;
mod snapshot;

pub use board::Board;
pub use snapshot::Snapshot;
