//! Outbound notifications.
//!
//! The game queues a `GameEvent` for every board mutation, game end, and
//! reset. Callers either drain the queue after each intent or hand it a
//! `GameObserver`; the game never calls out while it is mutating.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color};
use crate::rules::Outcome;

/// Something a renderer or network peer needs to mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell changed. `color` is the new occupant, `None` for removals.
    PieceChanged { cell: Cell, color: Option<Color> },
    /// The game ended. Emitted once per game.
    GameOver(Outcome),
    /// The board was cleared by a reset.
    BoardCleared,
}

impl GameEvent {
    /// Forward this event to the matching observer method.
    pub fn notify(&self, observer: &mut impl GameObserver) {
        match *self {
            GameEvent::PieceChanged { cell, color } => observer.on_piece_changed(cell, color),
            GameEvent::GameOver(outcome) => observer.on_win(outcome),
            GameEvent::BoardCleared => observer.on_board_cleared(),
        }
    }
}

/// Receiver for game events. All methods default to doing nothing.
pub trait GameObserver {
    fn on_piece_changed(&mut self, _cell: Cell, _color: Option<Color>) {}

    fn on_win(&mut self, _outcome: Outcome) {}

    fn on_board_cleared(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<(Cell, Option<Color>)>,
        wins: Vec<Outcome>,
        clears: usize,
    }

    impl GameObserver for Recorder {
        fn on_piece_changed(&mut self, cell: Cell, color: Option<Color>) {
            self.changes.push((cell, color));
        }

        fn on_win(&mut self, outcome: Outcome) {
            self.wins.push(outcome);
        }

        fn on_board_cleared(&mut self) {
            self.clears += 1;
        }
    }

    #[test]
    fn test_notify_routes_events() {
        let cell = Cell::new(0, 0, 0, 0).unwrap();
        let mut recorder = Recorder::default();

        GameEvent::PieceChanged { cell, color: Some(Color::Red) }.notify(&mut recorder);
        GameEvent::GameOver(Outcome::Draw).notify(&mut recorder);
        GameEvent::BoardCleared.notify(&mut recorder);

        assert_eq!(recorder.changes, vec![(cell, Some(Color::Red))]);
        assert_eq!(recorder.wins, vec![Outcome::Draw]);
        assert_eq!(recorder.clears, 1);
    }

    #[test]
    fn test_default_observer_ignores_events() {
        struct Silent;
        impl GameObserver for Silent {}

        GameEvent::BoardCleared.notify(&mut Silent);
    }
}
