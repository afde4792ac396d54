//! Snapshot export/import tests.

use mill3d::board::{Board, Snapshot};
use mill3d::core::{Cell, Color, ColorMap, MillConfig, SnapshotError, CELL_COUNT};
use mill3d::game::{GameEvent, GameState, Stage};
use mill3d::rules::Outcome;

fn cell(layer: u8, x: u8, y: u8, z: u8) -> Cell {
    Cell::new(layer, x, y, z).unwrap()
}

/// A short game with pieces of both colors and a capture behind it.
fn played_game() -> GameState {
    let mut game = GameState::new();
    game.place(Color::Red, cell(0, 1, 0, 0)).unwrap();
    game.place(Color::Blue, cell(0, 2, 2, 2)).unwrap();
    game.place(Color::Red, cell(1, 1, 0, 0)).unwrap();
    game.place(Color::Blue, cell(0, 0, 2, 2)).unwrap();
    game.place(Color::Red, cell(2, 1, 0, 0)).unwrap();
    game.capture(cell(0, 2, 2, 2)).unwrap();
    game.place(Color::Blue, cell(2, 0, 1, 2)).unwrap();
    game
}

// =============================================================================
// Round trips
// =============================================================================

/// Export then import on a fresh game reproduces the position.
#[test]
fn test_export_import_round_trip() {
    let game = played_game();
    let snapshot = game.export_snapshot();

    let mut other = GameState::new();
    other.import_snapshot(&snapshot).unwrap();

    assert_eq!(other.board(), game.board());
    assert_eq!(other.current_turn(), game.current_turn());
    for color in Color::ALL {
        assert_eq!(other.reserve(color), game.reserve(color));
        assert_eq!(other.on_board(color), game.on_board(color));
    }
    assert_eq!(other.stage(), Stage::Play);
    assert!(other.history().is_empty());
}

/// The binary encoding survives a trip through bytes.
#[test]
fn test_bytes_round_trip() {
    let snapshot = played_game().export_snapshot();

    let bytes = snapshot.to_bytes().unwrap();
    let decoded = Snapshot::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.board().unwrap().count_color(Color::Red), 3);
}

/// JSON snapshots without scores still load.
#[test]
fn test_json_without_scores() {
    let snapshot = played_game().export_snapshot();
    let mut value = serde_json::to_value(&snapshot).unwrap();
    value.as_object_mut().unwrap().remove("scores");

    let decoded: Snapshot = serde_json::from_value(value).unwrap();

    assert_eq!(decoded.cells, snapshot.cells);
    assert_eq!(decoded.scores, ColorMap::default());
}

/// Importing clears the selection and owed captures.
#[test]
fn test_import_clears_transient_state() {
    let mut game = GameState::new();
    game.place(Color::Red, cell(0, 1, 0, 0)).unwrap();
    game.place(Color::Blue, cell(0, 2, 2, 2)).unwrap();
    game.place(Color::Red, cell(1, 1, 0, 0)).unwrap();
    game.place(Color::Blue, cell(0, 0, 2, 2)).unwrap();
    game.place(Color::Red, cell(2, 1, 0, 0)).unwrap();
    assert_eq!(game.stage(), Stage::ResolvingCapture);

    let snapshot = game.export_snapshot();
    game.import_snapshot(&snapshot).unwrap();

    assert_eq!(game.stage(), Stage::Play);
    assert_eq!(game.mills_owed(), 0);
    assert_eq!(game.pending_move_source(), None);
    assert_eq!(game.current_turn(), Color::Red);
}

/// Importing a decided position ends the game without an event.
#[test]
fn test_import_terminal_position() {
    let mut board = Board::new();
    board.set(cell(0, 0, 0, 0), Some(Color::Red));
    board.set(cell(0, 2, 0, 0), Some(Color::Red));
    board.set(cell(2, 2, 2, 2), Some(Color::Blue));
    let snapshot = Snapshot::capture(&board, ColorMap::with_value(0), Color::Red, ColorMap::default());

    let mut game = GameState::new();
    game.drain_events();
    game.import_snapshot(&snapshot).unwrap();

    assert_eq!(game.stage(), Stage::GameOver);
    assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Blue)));
    assert!(!game.drain_events().iter().any(|e| matches!(e, GameEvent::GameOver(_))));
    assert_eq!(game.scores(), ColorMap::default());
}

/// A game built from a snapshot uses the given rules.
#[test]
fn test_from_snapshot_with_config() {
    let snapshot = played_game().export_snapshot();
    let config = MillConfig::default().with_flying_threshold(30);

    let game = GameState::from_snapshot(config, &snapshot).unwrap();

    assert!(game.can_fly(Color::Red));
    assert_eq!(game.config().flying_threshold, 30);
}

// =============================================================================
// Invalid snapshots
// =============================================================================

#[test]
fn test_rejects_short_cell_list() {
    let mut snapshot = played_game().export_snapshot();
    snapshot.cells.pop();

    let mut game = GameState::new();
    assert!(matches!(
        game.import_snapshot(&snapshot),
        Err(SnapshotError::CellCount(n)) if n == CELL_COUNT - 1
    ));
    assert!(game.board().empty_cells().count() == 60);
}

#[test]
fn test_rejects_unknown_code() {
    let mut snapshot = played_game().export_snapshot();
    snapshot.cells[5] = 3;

    assert!(matches!(
        snapshot.board(),
        Err(SnapshotError::ColorCode { index: 5, code: 3 })
    ));
}

#[test]
fn test_rejects_piece_on_dead_cell() {
    let mut snapshot = played_game().export_snapshot();
    let dead = cell(1, 1, 1, 1).index();
    snapshot.cells[dead] = 1;

    let mut game = played_game();
    let before = game.board().clone();

    assert!(matches!(
        game.import_snapshot(&snapshot),
        Err(SnapshotError::DeadCellOccupied(i)) if i == dead
    ));
    assert_eq!(game.board(), &before);
}

#[test]
fn test_rejects_garbage_bytes() {
    assert!(matches!(
        Snapshot::from_bytes(&[1, 2, 3]),
        Err(SnapshotError::Codec(_))
    ));
}

/// Reserves so large that the piece total overflows are refused, not summed.
#[test]
fn test_rejects_overflowing_reserve() {
    let mut board = Board::new();
    board.set(cell(0, 0, 0, 0), Some(Color::Red));
    let snapshot = Snapshot::capture(&board, ColorMap::with_value(u32::MAX), Color::Red, ColorMap::default());

    let mut game = GameState::new();
    assert!(matches!(
        game.import_snapshot(&snapshot),
        Err(SnapshotError::Reserves { color: Color::Red, reserve: u32::MAX, on_board: 1, limit: 23 })
    ));
    assert_eq!(game.reserve(Color::Red), 23);
    assert_eq!(game.stage(), Stage::Play);
}

/// A side cannot hold more pieces than the configured starting reserve.
#[test]
fn test_rejects_reserve_above_config() {
    let mut board = Board::new();
    board.set(cell(0, 0, 0, 0), Some(Color::Blue));
    board.set(cell(0, 2, 0, 0), Some(Color::Blue));
    let reserves = ColorMap::new(|c| match c {
        Color::Red => 23,
        Color::Blue => 22,
    });
    let snapshot = Snapshot::capture(&board, reserves, Color::Red, ColorMap::default());

    let mut game = played_game();
    let before = game.board().clone();
    assert!(matches!(
        game.import_snapshot(&snapshot),
        Err(SnapshotError::Reserves { color: Color::Blue, on_board: 2, .. })
    ));
    assert_eq!(game.board(), &before);

    let config = MillConfig::default().with_starting_reserve(24);
    let game = GameState::from_snapshot(config, &snapshot).unwrap();
    assert_eq!(game.total_pieces(Color::Blue), 24);
}
