//! Board geometry: the 3 × 3 × 3 × 3 index space.
//!
//! A cell is addressed by `(layer, x, y, z)`, each in `0..=2`. Layer 0 is the
//! outer cube, layer 2 the inner one. Within a layer only the shell of the
//! 3 × 3 × 3 grid is playable:
//!
//! - **Dead**: two or three coordinates equal 1 (face centers, body center).
//! - **Radial**: exactly one coordinate equals 1 (edge midpoints). These are
//!   the only cells connected to the neighbouring layers.
//! - **Corner**: no coordinate equals 1.
//!
//! Per layer that gives 8 corners + 12 radial cells = 20 playable cells and
//! 7 dead ones.

use serde::{Deserialize, Serialize};

use super::error::CellError;

/// Number of layers (nested cubes).
pub const LAYERS: u8 = 3;

/// Cells along each axis of a layer.
pub const SIDE: u8 = 3;

/// Cells per layer, dead ones included.
pub const CELLS_PER_LAYER: usize = 27;

/// Total cells on the board, dead ones included.
pub const CELL_COUNT: usize = 81;

/// A position on the board.
///
/// Fields are private: a `Cell` always holds in-range coordinates, so
/// indexing the board with one can never go out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub struct Cell {
    layer: u8,
    x: u8,
    y: u8,
    z: u8,
}

#[derive(Serialize, Deserialize)]
struct RawCell {
    layer: u8,
    x: u8,
    y: u8,
    z: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = CellError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.layer, raw.x, raw.y, raw.z)
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell {
            layer: cell.layer,
            x: cell.x,
            y: cell.y,
            z: cell.z,
        }
    }
}

impl Cell {
    /// Create a cell, rejecting any coordinate outside `0..=2`.
    pub fn new(layer: u8, x: u8, y: u8, z: u8) -> Result<Self, CellError> {
        if layer >= LAYERS || x >= SIDE || y >= SIDE || z >= SIDE {
            return Err(CellError::OutOfRange { layer, x, y, z });
        }
        Ok(Self { layer, x, y, z })
    }

    /// Create a cell from signed coordinates, `None` if any is out of range.
    ///
    /// Used when stepping by ±1 from an existing cell.
    #[must_use]
    pub fn checked(layer: i8, x: i8, y: i8, z: i8) -> Option<Self> {
        let in_range = |v: i8| (0..SIDE as i8).contains(&v);
        if in_range(layer) && in_range(x) && in_range(y) && in_range(z) {
            Some(Self {
                layer: layer as u8,
                x: x as u8,
                y: y as u8,
                z: z as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn layer(self) -> u8 {
        self.layer
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    #[must_use]
    pub const fn z(self) -> u8 {
        self.z
    }

    /// The `(x, y, z)` coordinates within the layer.
    #[must_use]
    pub const fn xyz(self) -> [u8; 3] {
        [self.x, self.y, self.z]
    }

    /// Same `(x, y, z)` on another layer.
    #[must_use]
    pub fn with_layer(self, layer: u8) -> Option<Self> {
        (layer < LAYERS).then_some(Self { layer, ..self })
    }

    /// Flat index in layer → x → y → z order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.layer as usize * CELLS_PER_LAYER
            + self.x as usize * 9
            + self.y as usize * 3
            + self.z as usize
    }

    /// Inverse of [`Cell::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let layer = (index / CELLS_PER_LAYER) as u8;
        let rest = index % CELLS_PER_LAYER;
        Some(Self {
            layer,
            x: (rest / 9) as u8,
            y: (rest / 3 % 3) as u8,
            z: (rest % 3) as u8,
        })
    }

    /// How many of x, y, z equal 1.
    #[must_use]
    pub const fn center_count(self) -> u8 {
        (self.x == 1) as u8 + (self.y == 1) as u8 + (self.z == 1) as u8
    }

    /// True unless the cell is a face or body center of its layer.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.center_count() < 2
    }

    /// True for edge midpoints, the only cells with inter-layer links.
    #[must_use]
    pub const fn is_radial(self) -> bool {
        self.center_count() == 1
    }

    /// All 81 cells in layer → x → y → z order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }

    /// The 60 playable cells, in board order.
    pub fn playable() -> impl Iterator<Item = Cell> {
        Cell::all().filter(|c| c.is_playable())
    }

    /// The cells of one layer, in board order.
    pub fn in_layer(layer: u8) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |c| c.layer == layer)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}({},{},{})", self.layer, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Cell::new(0, 0, 0, 0).is_ok());
        assert!(Cell::new(2, 2, 2, 2).is_ok());
        assert_eq!(
            Cell::new(3, 0, 0, 0),
            Err(CellError::OutOfRange { layer: 3, x: 0, y: 0, z: 0 })
        );
        assert!(Cell::new(0, 0, 3, 0).is_err());
    }

    #[test]
    fn test_checked() {
        assert_eq!(Cell::checked(1, 0, 2, 1), Cell::new(1, 0, 2, 1).ok());
        assert_eq!(Cell::checked(-1, 0, 0, 0), None);
        assert_eq!(Cell::checked(0, 0, 0, 3), None);
    }

    #[test]
    fn test_index_round_trip() {
        for i in 0..CELL_COUNT {
            let cell = Cell::from_index(i).unwrap();
            assert_eq!(cell.index(), i);
        }
        assert_eq!(Cell::from_index(CELL_COUNT), None);
    }

    #[test]
    fn test_iteration_order() {
        let cells: Vec<_> = Cell::all().take(4).collect();
        assert_eq!(cells[0], Cell::new(0, 0, 0, 0).unwrap());
        assert_eq!(cells[1], Cell::new(0, 0, 0, 1).unwrap());
        assert_eq!(cells[3], Cell::new(0, 0, 1, 0).unwrap());
        assert_eq!(Cell::all().nth(27), Cell::new(1, 0, 0, 0).ok());
    }

    #[test]
    fn test_classification_counts() {
        assert_eq!(Cell::all().count(), 81);
        assert_eq!(Cell::playable().count(), 60);
        assert_eq!(Cell::all().filter(|c| !c.is_playable()).count(), 21);
        assert_eq!(Cell::all().filter(|c| c.is_radial()).count(), 36);

        for layer in 0..LAYERS {
            assert_eq!(Cell::in_layer(layer).filter(|c| c.is_playable()).count(), 20);
        }
    }

    #[test]
    fn test_classification_by_kind() {
        let corner = Cell::new(0, 0, 0, 0).unwrap();
        let edge = Cell::new(0, 1, 0, 2).unwrap();
        let face = Cell::new(0, 1, 1, 0).unwrap();
        let body = Cell::new(0, 1, 1, 1).unwrap();

        assert!(corner.is_playable() && !corner.is_radial());
        assert!(edge.is_playable() && edge.is_radial());
        assert!(!face.is_playable() && !face.is_radial());
        assert!(!body.is_playable() && !body.is_radial());
    }

    #[test]
    fn test_with_layer() {
        let cell = Cell::new(0, 1, 0, 0).unwrap();
        assert_eq!(cell.with_layer(2), Cell::new(2, 1, 0, 0).ok());
        assert_eq!(cell.with_layer(3), None);
    }

    #[test]
    fn test_serde_validates() {
        let cell = Cell::new(1, 2, 0, 1).unwrap();
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(serde_json::from_str::<Cell>(&json).unwrap(), cell);

        let bad = r#"{"layer":0,"x":5,"y":0,"z":0}"#;
        assert!(serde_json::from_str::<Cell>(bad).is_err());
    }
}
