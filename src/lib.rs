//! # mill3d
//!
//! Rules engine for 3D Mill: Nine Men's Morris played on three nested cubes.
//!
//! ## The board
//!
//! Three layers of 3 × 3 × 3 cells. Only the shell of each layer is
//! playable: 8 corners and 12 edge midpoints per layer. Edge midpoints are
//! *radial* cells and connect to the same spot on the neighbouring layers.
//!
//! ## The rules
//!
//! - Each side starts with 23 pieces in reserve. On a turn you place a
//!   reserve piece or move one of yours a single step along a board line.
//! - Three in a row along a line is a mill. Each mill formed lets you
//!   capture one opponent piece that is not itself in a mill (unless all
//!   of them are).
//! - With three pieces or fewer left in total, a side may move anywhere.
//! - A side with fewer than three pieces left in total loses.
//!
//! ## Architecture
//!
//! - **Pure rules**: adjacency and mill detection are functions of the board
//!   alone and know nothing about turns.
//! - **One owner**: `GameState` is the only writer of the board. Rejected
//!   intents are typed errors and change nothing.
//! - **No callbacks during mutation**: events are queued and drained by the
//!   caller, so games can be embedded in any loop and run side by side.
//!
//! ## Modules
//!
//! - `core`: cells, colors, configuration, errors
//! - `board`: occupancy storage and snapshots
//! - `rules`: adjacency, mills, outcomes
//! - `game`: the turn/capture/win state machine
//!
//! ## Example
//!
//! ```
//! use mill3d::{Cell, Color, GameState, Stage};
//!
//! let mut game = GameState::new();
//! let line = [0, 1, 2].map(|layer| Cell::new(layer, 1, 0, 0).unwrap());
//! let filler = [Cell::new(0, 0, 0, 0).unwrap(), Cell::new(0, 2, 2, 2).unwrap()];
//!
//! game.place(Color::Red, line[0]).unwrap();
//! game.place(Color::Blue, filler[0]).unwrap();
//! game.place(Color::Red, line[1]).unwrap();
//! game.place(Color::Blue, filler[1]).unwrap();
//!
//! assert_eq!(game.place(Color::Red, line[2]), Ok(1));
//! assert_eq!(game.stage(), Stage::ResolvingCapture);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, ColorMap, MillConfig,
    CellError, ConfigError, Rejection, SnapshotError,
};

pub use crate::board::{Board, Snapshot};

pub use crate::rules::{
    is_legal_move, legal_destinations, Destinations,
    Line, MillDetector, Outcome,
};

pub use crate::game::{
    ActionRecord, GameEvent, GameObserver, GameState, Intent,
    PlayerState, Stage, TurnState,
};
