//! Serializable game position for persistence and network sync.
//!
//! Cells are stored as wire codes (0 = empty, 1 = Red, 2 = Blue) in
//! layer → x → y → z order, the same order the rules iterate in, so a full
//! board round-trips without any reordering.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::{Cell, Color, ColorMap, SnapshotError, CELL_COUNT};

/// A board plus the per-side counters needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// One wire code per cell, 81 entries.
    pub cells: Vec<u8>,

    /// Pieces not yet placed.
    pub reserves: ColorMap<u32>,

    /// Side to move.
    pub current_turn: Color,

    /// Games won so far. Absent in older snapshots.
    #[serde(default)]
    pub scores: ColorMap<u32>,
}

impl Snapshot {
    /// Encode a board.
    #[must_use]
    pub fn capture(
        board: &Board,
        reserves: ColorMap<u32>,
        current_turn: Color,
        scores: ColorMap<u32>,
    ) -> Self {
        Self {
            cells: board.iter().map(|(_, color)| Color::code(color)).collect(),
            reserves,
            current_turn,
            scores,
        }
    }

    /// Decode the board, checking length, codes, and that dead cells are empty.
    pub fn board(&self) -> Result<Board, SnapshotError> {
        if self.cells.len() != CELL_COUNT {
            return Err(SnapshotError::CellCount(self.cells.len()));
        }

        let mut board = Board::new();
        for (cell, &code) in Cell::all().zip(&self.cells) {
            let index = cell.index();
            let color = Color::from_code(code)
                .map_err(|code| SnapshotError::ColorCode { index, code })?;
            if color.is_some() && !cell.is_playable() {
                return Err(SnapshotError::DeadCellOccupied(index));
            }
            board.set(cell, color);
        }
        Ok(board)
    }

    /// Binary encoding for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`Snapshot::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
