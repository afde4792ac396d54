//! Cell occupancy.
//!
//! The `Board` is a total map from every [`Cell`] to its occupant. It knows
//! nothing about turns or rules; callers validate before writing.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, SnapshotError, CELL_COUNT};

/// Occupancy of all 81 cells.
///
/// Dead cells are never written by the game and always read as empty.
///
/// ## Usage
///
/// ```
/// use mill3d::board::Board;
/// use mill3d::core::{Cell, Color};
///
/// let mut board = Board::new();
/// let cell = Cell::new(0, 1, 0, 0).unwrap();
///
/// board.set(cell, Some(Color::Red));
/// assert_eq!(board.get(cell), Some(Color::Red));
/// assert_eq!(board.count_color(Color::Red), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Color>>", into = "Vec<Option<Color>>")]
pub struct Board {
    cells: Vec<Option<Color>>,
}

impl TryFrom<Vec<Option<Color>>> for Board {
    type Error = SnapshotError;

    /// Accept only 81 cells with every dead cell empty.
    fn try_from(cells: Vec<Option<Color>>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(SnapshotError::CellCount(cells.len()));
        }
        if let Some(dead) = Cell::all().find(|c| !c.is_playable() && cells[c.index()].is_some()) {
            return Err(SnapshotError::DeadCellOccupied(dead.index()));
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Option<Color>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![None; CELL_COUNT],
        }
    }

    /// Occupant of a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Color> {
        self.cells[cell.index()]
    }

    /// Unconditionally overwrite a cell.
    pub fn set(&mut self, cell: Cell, color: Option<Color>) {
        self.cells[cell.index()] = color;
    }

    /// True if the cell holds no piece.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// True when every playable cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Cell::playable().all(|cell| self.get(cell).is_some())
    }

    /// Number of pieces of `color` across all layers.
    #[must_use]
    pub fn count_color(&self, color: Color) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(color)).count() as u32
    }

    /// Cells holding `color`, in board order.
    pub fn cells_of(&self, color: Color) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.get(cell) == Some(color))
    }

    /// Empty playable cells, in board order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::playable().filter(move |&cell| self.is_empty(cell))
    }

    /// Occupants in layer → x → y → z order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Color>)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }
}
