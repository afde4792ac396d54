//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side won.
    Winner(Color),
    /// Nobody won: the board filled up or the side to move was stuck.
    Draw,
}

impl Outcome {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, Outcome::Winner(c) if *c == color)
    }

    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(c) => Some(*c),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(c) => write!(f, "{c} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Color::Blue);
        assert!(!result.is_winner(Color::Red));
        assert!(result.is_winner(Color::Blue));
        assert_eq!(result.winner(), Some(Color::Blue));
        assert_eq!(result.to_string(), "Blue wins");

        assert!(!Outcome::Draw.is_winner(Color::Red));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
