//! Board rules that do not depend on whose turn it is.
//!
//! - `adjacency`: one-step destinations of a piece
//! - `mills`: board lines, mill counting, capture eligibility
//! - `outcome`: how a game ended
//!
//! Turn order, reserves and the flying rule live in `game`.

pub mod adjacency;
pub mod mills;
pub mod outcome;

pub use adjacency::{is_legal_move, legal_destinations, Destinations};
pub use mills::{all_lines, lines_through, Line, MillDetector};
pub use outcome::Outcome;
