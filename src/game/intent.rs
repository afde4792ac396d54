//! Player intents and the action history.
//!
//! An `Intent` is one request from an input or network layer. Accepted
//! intents are recorded as `ActionRecord`s, which is enough to replay a game
//! from its start.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color};

/// A request to change the game.
///
/// ## Example
///
/// ```
/// use mill3d::core::{Cell, Color};
/// use mill3d::game::{GameState, Intent};
///
/// let mut game = GameState::new();
/// let cell = Cell::new(0, 0, 0, 0).unwrap();
///
/// game.apply(Intent::Place { color: Color::Red, cell }).unwrap();
/// assert_eq!(game.board().get(cell), Some(Color::Red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place a reserve piece, or finish a move if a piece is selected.
    Place { color: Color, cell: Cell },
    /// Select (or deselect) one of the mover's pieces to move.
    Select { cell: Cell },
    /// Move a piece in one step.
    Move { source: Cell, dest: Cell },
    /// Remove an opponent piece after forming a mill.
    Capture { cell: Cell },
    /// Concede the game.
    Forfeit { color: Color },
    /// Clear the board and start over.
    Reset,
}

/// A recorded intent with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Side to move when the intent was accepted.
    pub color: Color,

    pub intent: Intent,

    /// Turn number when the intent was accepted.
    pub turn: u32,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(color: Color, intent: Intent, turn: u32, sequence: u32) -> Self {
        Self {
            color,
            intent,
            turn,
            sequence,
        }
    }
}
