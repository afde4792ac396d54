//! Movement adjacency.
//!
//! A piece moves one step along a board line:
//!
//! - **In-layer**: to a playable cell that differs from the source in exactly
//!   one of x, y, z, by one step. Corners reach the three edge midpoints next
//!   to them; edge midpoints reach their two corners.
//! - **Cross-layer**: radial cells (edge midpoints) also reach the same
//!   `(x, y, z)` on the layer directly above and below.
//!
//! The flying rule depends on piece counts and is applied by the game, not
//! here.

use smallvec::SmallVec;

use crate::core::Cell;

/// Destinations of one piece. A cell has at most 4 neighbours.
pub type Destinations = SmallVec<[Cell; 4]>;

/// All cells a piece on `source` may step to, ignoring occupancy.
#[must_use]
pub fn legal_destinations(source: Cell) -> Destinations {
    let mut out = Destinations::new();
    if !source.is_playable() {
        return out;
    }

    let [sx, sy, sz] = source.xyz().map(|v| v as i8);
    let layer = source.layer() as i8;

    for dx in -1..=1i8 {
        for dy in -1..=1i8 {
            for dz in -1..=1i8 {
                let Some(candidate) = Cell::checked(layer, sx + dx, sy + dy, sz + dz) else {
                    continue;
                };
                if candidate == source || !candidate.is_playable() {
                    continue;
                }
                // Exactly one coordinate changes: no diagonals within a layer.
                let unchanged = (dx == 0) as u8 + (dy == 0) as u8 + (dz == 0) as u8;
                if unchanged == 2 {
                    out.push(candidate);
                }
            }
        }
    }

    if source.is_radial() {
        for dl in [-1i8, 1] {
            if let Some(other) = Cell::checked(layer + dl, sx, sy, sz) {
                out.push(other);
            }
        }
    }

    out
}

/// True if `dest` is one step from `source`.
#[must_use]
pub fn is_legal_move(source: Cell, dest: Cell) -> bool {
    legal_destinations(source).contains(&dest)
}
