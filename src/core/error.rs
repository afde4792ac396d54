//! Error types.
//!
//! Rule violations are ordinary outcomes of a bad intent, not faults: every
//! one is a [`Rejection`] and the game stays usable afterwards.

use thiserror::Error;

use super::color::Color;

/// Why an intent was refused. A rejected intent changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The destination already holds a piece.
    #[error("cell is already occupied")]
    CellOccupied,

    /// The cell is a face or body center and can never hold a piece.
    #[error("cell is not playable")]
    CellDead,

    /// The intent came from the side that is not to move.
    #[error("it is {current}'s turn")]
    NotYourTurn { current: Color },

    /// The destination is not reachable from the selected piece.
    #[error("destination is not reachable from the selected piece")]
    IllegalDestination,

    /// No pieces left in reserve to place.
    #[error("no pieces left in reserve")]
    NoReserve,

    /// The target sits in a mill while other targets exist.
    #[error("piece is part of a mill and other pieces can be captured")]
    CaptureNotAllowed,

    /// The game has ended; only a reset is accepted.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Captures must be resolved before placing or moving.
    #[error("{owed} capture(s) must be made first")]
    CapturePending { owed: u32 },

    /// A capture was requested but no mill was formed.
    #[error("no capture is owed")]
    NoCaptureOwed,

    /// The source cell does not hold one of the mover's pieces.
    #[error("cell does not hold one of your pieces")]
    NotYourPiece,

    /// The capture target does not hold an opponent piece.
    #[error("cell does not hold an opponent piece")]
    NotOpponentPiece,
}

/// Invalid cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("cell ({layer}, {x}, {y}, {z}) is out of range; every index must be 0..=2")]
    OutOfRange { layer: u8, x: u8, y: u8, z: u8 },
}

/// Failures when importing a board snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot has {0} cells, expected 81")]
    CellCount(usize),

    #[error("invalid color code {code} at cell index {index}")]
    ColorCode { index: usize, code: u8 },

    #[error("dead cell at index {0} is occupied")]
    DeadCellOccupied(usize),

    #[error("{color} has {reserve} in reserve and {on_board} on the board, more than the {limit} allowed")]
    Reserves {
        color: Color,
        reserve: u32,
        on_board: u32,
        limit: u32,
    },

    #[error("failed to encode or decode snapshot: {0}")]
    Codec(#[from] bincode::Error),
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Invalid(String),
}
