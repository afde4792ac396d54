//! Turn and per-player bookkeeping.
//!
//! ## TurnState
//!
//! Who is to move, which piece (if any) is selected for a move, how many
//! captures are still owed, and the overall stage.
//!
//! ## PlayerState
//!
//! Reserve counts per color. On-board counts are always read from the
//! board so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, ColorMap, Rejection};

/// Overall phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for the side to move to place or move a piece.
    Play,
    /// A mill was formed; the mover must capture before the turn passes.
    ResolvingCapture,
    /// The game has ended. Only a reset is accepted.
    GameOver,
}

/// Turn-level state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Side to move.
    pub current_turn: Color,

    /// Piece selected to move, if any.
    pub pending_move_source: Option<Cell>,

    /// Captures still due this turn.
    pub mills_owed: u32,

    pub stage: Stage,

    /// Turn number (starts at 1, increments on every turn change).
    pub turn_number: u32,
}

impl TurnState {
    /// A fresh turn with `first` to move.
    #[must_use]
    pub fn new(first: Color) -> Self {
        Self {
            current_turn: first,
            pending_move_source: None,
            mills_owed: 0,
            stage: Stage::Play,
            turn_number: 1,
        }
    }

    /// The side not to move.
    #[must_use]
    pub fn opponent(&self) -> Color {
        self.current_turn.opponent()
    }

    /// Pass the turn: swap sides, drop the selection and any owed captures.
    pub fn advance(&mut self) {
        self.current_turn = self.current_turn.opponent();
        self.pending_move_source = None;
        self.mills_owed = 0;
        if self.stage != Stage::GameOver {
            self.stage = Stage::Play;
        }
        self.turn_number += 1;
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.stage == Stage::GameOver
    }
}

/// Reserve pieces per color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    reserves: ColorMap<u32>,
}

impl PlayerState {
    /// Both colors start with `reserve` pieces.
    #[must_use]
    pub fn new(reserve: u32) -> Self {
        Self {
            reserves: ColorMap::with_value(reserve),
        }
    }

    #[must_use]
    pub fn reserve(&self, color: Color) -> u32 {
        self.reserves[color]
    }

    /// All reserves, for snapshots.
    #[must_use]
    pub fn reserves(&self) -> ColorMap<u32> {
        self.reserves
    }

    /// Overwrite one color's reserve.
    pub fn set_reserve(&mut self, color: Color, reserve: u32) {
        self.reserves.set(color, reserve);
    }

    /// Overwrite both reserves.
    pub fn set_reserves(&mut self, reserves: ColorMap<u32>) {
        self.reserves = reserves;
    }

    /// Take one piece out of reserve.
    pub fn take(&mut self, color: Color) -> Result<(), Rejection> {
        let reserve = self.reserves.get_mut(color);
        if *reserve == 0 {
            return Err(Rejection::NoReserve);
        }
        *reserve -= 1;
        Ok(())
    }
}
