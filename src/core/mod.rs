//! Core types: cells, colors, configuration, errors.
//!
//! Everything here is plain data with no game logic beyond the fixed
//! geometry of the board.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;

pub use cell::{Cell, CELLS_PER_LAYER, CELL_COUNT, LAYERS, SIDE};
pub use color::{Color, ColorMap};
pub use config::MillConfig;
pub use error::{CellError, ConfigError, Rejection, SnapshotError};
