//! Turn-based game engine.
//!
//! - `GameState`: validates intents and drives placement, movement,
//!   capture, turn changes and win detection
//! - `TurnState` / `PlayerState`: turn bookkeeping and reserves
//! - `Intent` / `ActionRecord`: inbound requests and their history
//! - `GameEvent` / `GameObserver`: outbound notifications
//!
//! The engine is synchronous and single-owner. An embedding UI loop or
//! network handler must feed it one intent at a time.

mod engine;
pub mod events;
pub mod intent;
pub mod state;

pub use engine::GameState;
pub use events::{GameEvent, GameObserver};
pub use intent::{ActionRecord, Intent};
pub use state::{PlayerState, Stage, TurnState};
