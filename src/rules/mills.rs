//! Mill detection.
//!
//! A mill is three same-colored pieces on one board line. There are 48
//! lines in two families:
//!
//! - **Axis lines** (36): within one layer, one of x, y, z runs 0..=2 while
//!   the other two are fixed at 0 or 2. Lines through index 1 would cross a
//!   dead center and do not exist.
//! - **Radial lines** (12): a radial `(x, y, z)` taken across all three
//!   layers.
//!
//! A corner lies on three axis lines; a radial cell lies on one axis line
//! and one radial line.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, Color, LAYERS};

/// Three cells forming a board line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line(pub [Cell; 3]);

impl Line {
    /// True if `cell` lies on this line.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// True if all three cells hold `color`.
    #[must_use]
    pub fn is_filled_by(&self, board: &Board, color: Color) -> bool {
        self.0.iter().all(|&cell| board.get(cell) == Some(color))
    }
}

/// Every line passing through `cell`. Empty for dead cells.
#[must_use]
pub fn lines_through(cell: Cell) -> SmallVec<[Line; 3]> {
    let mut lines = SmallVec::new();
    if !cell.is_playable() {
        return lines;
    }

    let xyz = cell.xyz();
    for axis in 0..3 {
        let fixed_on_shell = (0..3)
            .filter(|&other| other != axis)
            .all(|other| xyz[other] != 1);
        if fixed_on_shell {
            lines.extend(axis_line(cell, axis));
        }
    }

    if cell.is_radial() {
        lines.extend(radial_line(cell));
    }

    lines
}

/// All 48 board lines, each listed once.
#[must_use]
pub fn all_lines() -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::with_capacity(48);
    for cell in Cell::playable() {
        for line in lines_through(cell) {
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
    }
    lines
}

fn axis_line(cell: Cell, axis: usize) -> Option<Line> {
    let mut cells = [cell; 3];
    for (i, slot) in cells.iter_mut().enumerate() {
        let mut coords = cell.xyz().map(|v| v as i8);
        coords[axis] = i as i8;
        let [x, y, z] = coords;
        *slot = Cell::checked(cell.layer() as i8, x, y, z)?;
    }
    Some(Line(cells))
}

fn radial_line(cell: Cell) -> Option<Line> {
    let mut cells = [cell; 3];
    for (layer, slot) in (0..LAYERS).zip(cells.iter_mut()) {
        *slot = cell.with_layer(layer)?;
    }
    Some(Line(cells))
}

/// Read-only mill queries over a board.
#[derive(Clone, Copy, Debug)]
pub struct MillDetector<'a> {
    board: &'a Board,
}

impl<'a> MillDetector<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Number of completed lines through `pos` in its occupant's color.
    ///
    /// Zero for an empty cell.
    #[must_use]
    pub fn mills_through(&self, pos: Cell) -> u32 {
        let Some(color) = self.board.get(pos) else {
            return 0;
        };
        lines_through(pos)
            .iter()
            .filter(|line| line.is_filled_by(self.board, color))
            .count() as u32
    }

    /// True if `pos` is part of at least one mill.
    #[must_use]
    pub fn in_mill(&self, pos: Cell) -> bool {
        self.mills_through(pos) > 0
    }

    /// Pieces of `color` that are not part of any mill.
    #[must_use]
    pub fn non_mill_piece_count(&self, color: Color) -> u32 {
        self.board
            .cells_of(color)
            .filter(|&cell| !self.in_mill(cell))
            .count() as u32
    }
}
