//! The game state machine.
//!
//! `GameState` owns the board, reserves and turn state, and is the only
//! thing that mutates them. Every intent is validated in full before any
//! write, so a rejected intent leaves the game exactly as it was.
//!
//! ## Turn flow
//!
//! 1. The side to move places a reserve piece or moves a piece one step
//!    (any distance once it is down to its flying threshold).
//! 2. Each mill formed by the landing piece owes one capture. If every
//!    opponent piece is already in a mill, nothing is owed.
//! 3. Captures are made one at a time; the turn passes when none are owed.
//! 4. After every accepted intent the game checks for a loser (reserve +
//!    on-board below the losing threshold), a full board, or a stuck mover.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::events::{GameEvent, GameObserver};
use super::intent::{ActionRecord, Intent};
use super::state::{PlayerState, Stage, TurnState};
use crate::board::{Board, Snapshot};
use crate::core::{Cell, Color, ColorMap, ConfigError, MillConfig, Rejection, SnapshotError};
use crate::rules::{is_legal_move, legal_destinations, Destinations, MillDetector, Outcome};

/// A single game of 3D Mill.
///
/// Independent instances share nothing, so any number of games can run side
/// by side. Cloning is cheap: the history is a persistent vector.
#[derive(Clone, Debug)]
pub struct GameState {
    config: MillConfig,
    board: Board,
    players: PlayerState,
    turn: TurnState,
    outcome: Option<Outcome>,
    scores: ColorMap<u32>,
    history: Vector<ActionRecord>,
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::build(MillConfig::default())
    }

    /// A new game with custom rules.
    pub fn with_config(config: MillConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MillConfig) -> Self {
        Self {
            board: Board::new(),
            players: PlayerState::new(config.starting_reserve),
            turn: TurnState::new(config.first_turn),
            outcome: None,
            scores: ColorMap::default(),
            history: Vector::new(),
            events: Vec::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MillConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.turn.current_turn
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.turn.stage
    }

    #[must_use]
    pub fn mills_owed(&self) -> u32 {
        self.turn.mills_owed
    }

    #[must_use]
    pub fn pending_move_source(&self) -> Option<Cell> {
        self.turn.pending_move_source
    }

    #[must_use]
    pub fn reserve(&self, color: Color) -> u32 {
        self.players.reserve(color)
    }

    #[must_use]
    pub fn on_board(&self, color: Color) -> u32 {
        self.board.count_color(color)
    }

    /// Reserve plus on-board pieces.
    #[must_use]
    pub fn total_pieces(&self, color: Color) -> u32 {
        self.reserve(color).saturating_add(self.on_board(color))
    }

    /// True if `color` may move to any empty cell.
    #[must_use]
    pub fn can_fly(&self, color: Color) -> bool {
        self.total_pieces(color) <= self.config.flying_threshold
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Games won per color. Survives resets.
    #[must_use]
    pub fn scores(&self) -> ColorMap<u32> {
        self.scores
    }

    /// Accepted intents since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Mill queries over the current board.
    #[must_use]
    pub fn mills(&self) -> MillDetector<'_> {
        MillDetector::new(&self.board)
    }

    // === Intents ===

    /// Apply any intent.
    pub fn apply(&mut self, intent: Intent) -> Result<(), Rejection> {
        match intent {
            Intent::Place { color, cell } => self.place(color, cell).map(|_| ()),
            Intent::Select { cell } => self.select(cell).map(|_| ()),
            Intent::Move { source, dest } => self.move_piece(source, dest).map(|_| ()),
            Intent::Capture { cell } => self.capture(cell),
            Intent::Forfeit { color } => self.forfeit(color).map(|_| ()),
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Place a reserve piece of `color` on `cell`.
    ///
    /// If a piece is selected, this completes its move to `cell` instead.
    /// Returns the number of mills formed.
    pub fn place(&mut self, color: Color, cell: Cell) -> Result<u32, Rejection> {
        self.check_can_act()?;
        if color != self.turn.current_turn {
            return self.reject(Rejection::NotYourTurn {
                current: self.turn.current_turn,
            });
        }
        if let Some(source) = self.turn.pending_move_source {
            return self.move_piece(source, cell);
        }
        self.check_landing(cell)?;
        if self.players.reserve(color) == 0 {
            return self.reject(Rejection::NoReserve);
        }

        self.record(Intent::Place { color, cell });
        self.players.take(color)?;
        self.write(cell, Some(color));
        debug!(%color, %cell, reserve = self.players.reserve(color), "placed piece");

        Ok(self.after_landing(cell))
    }

    /// Select one of the mover's pieces to move, or deselect it.
    ///
    /// Selecting the selected piece again clears the selection. Returns the
    /// new selection.
    pub fn select(&mut self, cell: Cell) -> Result<Option<Cell>, Rejection> {
        self.check_can_act()?;
        if self.turn.pending_move_source == Some(cell) {
            self.record(Intent::Select { cell });
            self.turn.pending_move_source = None;
            return Ok(None);
        }
        if self.board.get(cell) != Some(self.turn.current_turn) {
            return self.reject(Rejection::NotYourPiece);
        }

        self.record(Intent::Select { cell });
        self.turn.pending_move_source = Some(cell);
        Ok(Some(cell))
    }

    /// Move the mover's piece from `source` to `dest`.
    ///
    /// Returns the number of mills formed at `dest`.
    pub fn move_piece(&mut self, source: Cell, dest: Cell) -> Result<u32, Rejection> {
        self.check_can_act()?;
        let color = self.turn.current_turn;
        if self.board.get(source) != Some(color) {
            return self.reject(Rejection::NotYourPiece);
        }
        self.check_landing(dest)?;
        if !(is_legal_move(source, dest) || self.can_fly(color)) {
            return self.reject(Rejection::IllegalDestination);
        }

        self.record(Intent::Move { source, dest });
        self.write(source, None);
        self.write(dest, Some(color));
        debug!(%color, %source, %dest, "moved piece");

        Ok(self.after_landing(dest))
    }

    /// Remove an opponent piece. Only allowed while captures are owed.
    ///
    /// Pieces in a mill can only be taken when every opponent piece is in one.
    pub fn capture(&mut self, target: Cell) -> Result<(), Rejection> {
        if self.turn.is_over() {
            return self.reject(Rejection::GameAlreadyOver);
        }
        if self.turn.stage != Stage::ResolvingCapture {
            return self.reject(Rejection::NoCaptureOwed);
        }
        let opponent = self.turn.opponent();
        if self.board.get(target) != Some(opponent) {
            return self.reject(Rejection::NotOpponentPiece);
        }
        let mills = self.mills();
        if mills.in_mill(target) && mills.non_mill_piece_count(opponent) > 0 {
            return self.reject(Rejection::CaptureNotAllowed);
        }

        self.record(Intent::Capture { cell: target });
        self.write(target, None);
        self.turn.mills_owed -= 1;
        debug!(color = %self.turn.current_turn, %target, owed = self.turn.mills_owed, "captured piece");

        // Nothing left to take means nothing more is owed.
        if self.turn.mills_owed == 0 || self.on_board(opponent) == 0 {
            self.advance_turn();
        }
        self.check_game_over();
        Ok(())
    }

    /// Concede. The other side wins.
    pub fn forfeit(&mut self, color: Color) -> Result<Outcome, Rejection> {
        if self.turn.is_over() {
            return self.reject(Rejection::GameAlreadyOver);
        }
        self.record(Intent::Forfeit { color });
        let outcome = Outcome::Winner(color.opponent());
        self.finish(outcome);
        Ok(outcome)
    }

    /// Pass the turn without acting, for external turn clocks.
    pub fn advance_turn_externally(&mut self) -> Result<(), Rejection> {
        if self.turn.is_over() {
            return self.reject(Rejection::GameAlreadyOver);
        }
        self.advance_turn();
        self.check_game_over();
        Ok(())
    }

    /// Clear the board and start a new game. Scores are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.players = PlayerState::new(self.config.starting_reserve);
        self.turn = TurnState::new(self.config.first_turn);
        self.outcome = None;
        self.history = Vector::new();
        self.events.push(GameEvent::BoardCleared);
        info!(first = %self.config.first_turn, "game reset");
    }

    // === Queries ===

    /// True if the side to move could place, or finish its selected move, on
    /// `cell` right now.
    #[must_use]
    pub fn can_drop_at(&self, cell: Cell) -> bool {
        if self.turn.stage != Stage::Play || !cell.is_playable() || !self.board.is_empty(cell) {
            return false;
        }
        let color = self.turn.current_turn;
        match self.turn.pending_move_source {
            Some(source) => is_legal_move(source, cell) || self.can_fly(color),
            None => self.players.reserve(color) > 0,
        }
    }

    /// Every movable piece of `color` with its empty destinations.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> FxHashMap<Cell, Destinations> {
        let flying = self.can_fly(color);
        let mut moves = FxHashMap::default();

        for source in self.board.cells_of(color) {
            let dests: Destinations = if flying {
                self.board.empty_cells().collect()
            } else {
                legal_destinations(source)
                    .into_iter()
                    .filter(|&dest| self.board.is_empty(dest))
                    .collect()
            };
            if !dests.is_empty() {
                moves.insert(source, dests);
            }
        }

        moves
    }

    /// True if `color` can place or move anything.
    #[must_use]
    pub fn has_legal_action(&self, color: Color) -> bool {
        let can_place = self.players.reserve(color) > 0 && self.board.empty_cells().next().is_some();
        can_place || !self.legal_moves(color).is_empty()
    }

    // === Events ===

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain queued events into an observer.
    pub fn dispatch(&mut self, observer: &mut impl GameObserver) {
        for event in self.drain_events() {
            event.notify(observer);
        }
    }

    // === Snapshots ===

    /// Capture board, reserves, side to move and scores.
    #[must_use]
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.board,
            self.players.reserves(),
            self.turn.current_turn,
            self.scores,
        )
    }

    /// Replace this game's position with a snapshot.
    ///
    /// The selection, owed captures and history are cleared. If the imported
    /// position is already decided the game goes straight to `GameOver`
    /// without emitting an event. A side holding more pieces than the
    /// configured starting reserve is rejected.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let board = snapshot.board()?;
        let limit = self.config.starting_reserve;
        for color in Color::ALL {
            let reserve = snapshot.reserves[color];
            let on_board = board.count_color(color);
            if reserve.checked_add(on_board).map_or(true, |total| total > limit) {
                return Err(SnapshotError::Reserves {
                    color,
                    reserve,
                    on_board,
                    limit,
                });
            }
        }

        self.board = board;
        self.players.set_reserves(snapshot.reserves);
        self.scores = snapshot.scores;
        self.turn = TurnState::new(snapshot.current_turn);
        self.history = Vector::new();
        self.outcome = self.evaluate_outcome();
        if self.outcome.is_some() {
            self.turn.stage = Stage::GameOver;
        }
        debug!(turn = %snapshot.current_turn, "imported snapshot");
        Ok(())
    }

    /// A new game positioned at `snapshot`.
    pub fn from_snapshot(config: MillConfig, snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut game = Self::build(config);
        game.import_snapshot(snapshot)?;
        Ok(game)
    }

    // === Internals ===

    fn check_can_act(&self) -> Result<(), Rejection> {
        match self.turn.stage {
            Stage::GameOver => self.reject(Rejection::GameAlreadyOver),
            Stage::ResolvingCapture => self.reject(Rejection::CapturePending {
                owed: self.turn.mills_owed,
            }),
            Stage::Play => Ok(()),
        }
    }

    fn check_landing(&self, cell: Cell) -> Result<(), Rejection> {
        if !cell.is_playable() {
            return self.reject(Rejection::CellDead);
        }
        if !self.board.is_empty(cell) {
            return self.reject(Rejection::CellOccupied);
        }
        Ok(())
    }

    fn reject<T>(&self, rejection: Rejection) -> Result<T, Rejection> {
        debug!(turn = %self.turn.current_turn, %rejection, "intent rejected");
        Err(rejection)
    }

    fn record(&mut self, intent: Intent) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(
            self.turn.current_turn,
            intent,
            self.turn.turn_number,
            sequence,
        ));
    }

    fn write(&mut self, cell: Cell, color: Option<Color>) {
        self.board.set(cell, color);
        self.events.push(GameEvent::PieceChanged { cell, color });
    }

    /// Settle mills after a piece lands on `cell`. Returns mills formed.
    fn after_landing(&mut self, cell: Cell) -> u32 {
        let opponent = self.turn.opponent();
        let mills = self.mills();
        let formed = mills.mills_through(cell);
        let capturable = mills.non_mill_piece_count(opponent) > 0;

        if formed > 0 && capturable {
            self.turn.stage = Stage::ResolvingCapture;
            self.turn.mills_owed = formed;
            self.turn.pending_move_source = None;
            debug!(color = %self.turn.current_turn, owed = formed, "mill formed");
        } else {
            self.advance_turn();
        }

        self.check_game_over();
        formed
    }

    fn advance_turn(&mut self) {
        self.turn.advance();
        debug!(turn = %self.turn.current_turn, number = self.turn.turn_number, "turn advanced");
    }

    fn check_game_over(&mut self) {
        if self.turn.is_over() {
            return;
        }
        if let Some(outcome) = self.evaluate_outcome() {
            self.finish(outcome);
        }
    }

    fn evaluate_outcome(&self) -> Option<Outcome> {
        for color in Color::ALL {
            if self.total_pieces(color) < self.config.losing_threshold {
                return Some(Outcome::Winner(color.opponent()));
            }
        }
        if self.board.is_full() {
            return Some(Outcome::Draw);
        }
        if self.turn.stage == Stage::Play && !self.has_legal_action(self.turn.current_turn) {
            return Some(Outcome::Draw);
        }
        None
    }

    fn finish(&mut self, outcome: Outcome) {
        self.turn.stage = Stage::GameOver;
        self.turn.pending_move_source = None;
        self.turn.mills_owed = 0;
        self.outcome = Some(outcome);
        if let Some(winner) = outcome.winner() {
            self.scores[winner] += 1;
        }
        self.events.push(GameEvent::GameOver(outcome));
        info!(%outcome, "game over");
    }
}
