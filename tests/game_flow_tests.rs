//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - Selection and re-selection
//! - Captures and off-board parking
//! - Rejected moves

use std::time::Duration;

use nexus_chess::core::ChessConfig;
use nexus_chess::game::{
    BoardState, ChessGame, GameError, PickOutcome, PickTarget, PieceColor, PieceId, PieceKind,
    Square,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Drives a game the way a pointer would, with a virtual clock
struct Driver {
    game: ChessGame,
    clock: Duration,
}

impl Driver {
    fn new(game: ChessGame) -> Self {
        Self {
            game,
            clock: Duration::ZERO,
        }
    }

    fn pick(&mut self, name: &str) -> PickOutcome {
        self.game.on_pick(PickTarget::Square(sq(name)), None)
    }

    fn settle(&mut self) {
        while self.game.has_active_animations() {
            self.game.tick(self.clock);
            self.clock += Duration::from_millis(16);
        }
    }

    fn play(&mut self, from: &str, to: &str) {
        assert!(
            matches!(self.pick(from), PickOutcome::Selected(_)),
            "{from} should select a piece"
        );
        assert!(
            matches!(self.pick(to), PickOutcome::MoveStarted(_)),
            "{from}{to} should start a move"
        );
        self.settle();
    }
}

fn assert_one_piece_per_square(board: &BoardState) {
    for square in Square::all() {
        let count = board.live_pieces().filter(|p| p.square == square).count();
        assert!(count <= 1, "{square} holds {count} live pieces");
    }
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_pawn_push_passes_turn_to_black() {
    let mut driver = Driver::new(ChessGame::default());

    let outcome = driver.pick("e2");
    let pawn = driver.game.board().piece_at(sq("e2")).unwrap().id;
    assert_eq!(outcome, PickOutcome::Selected(pawn));
    assert_eq!(driver.game.selection().possible_moves, vec![sq("e3"), sq("e4")]);

    assert!(matches!(driver.pick("e3"), PickOutcome::MoveStarted(_)));
    driver.settle();

    assert_eq!(driver.game.current_player(), PieceColor::Black);
    assert!(driver.game.board().is_empty(sq("e2")), "e2 should be empty after the move");
    assert_eq!(driver.game.board().piece_at(sq("e3")).unwrap().id, pawn);
    assert!(driver.game.board().piece(pawn).unwrap().has_moved);
    assert!(driver.game.selected_piece().is_none());
}

#[test]
fn test_turns_alternate_over_several_moves() {
    let mut driver = Driver::new(ChessGame::default());
    let replies = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")];

    for (i, (from, to)) in replies.iter().enumerate() {
        let expected = if i % 2 == 0 { PieceColor::White } else { PieceColor::Black };
        assert_eq!(driver.game.current_player(), expected, "before move {}", i + 1);
        driver.play(from, to);
    }

    assert_eq!(driver.game.current_player(), PieceColor::Black);
    assert_eq!(driver.game.current_turn().move_number, 3);
    assert_eq!(driver.game.history().len(), 5);
}

#[test]
fn test_rejected_picks_never_pass_the_turn() {
    let mut driver = Driver::new(ChessGame::default());

    // Opponent's piece, empty square, then an unreachable target
    assert_eq!(driver.pick("e7"), PickOutcome::Ignored);
    assert_eq!(driver.pick("e5"), PickOutcome::Ignored);
    driver.pick("e2");
    assert_eq!(driver.pick("e5"), PickOutcome::Ignored);
    assert_eq!(driver.pick("d2"), PickOutcome::Selected(PieceId(11)));
    driver.settle();

    assert_eq!(driver.game.current_player(), PieceColor::White);
    assert!(driver.game.history().is_empty());
    assert_eq!(driver.game.board(), &BoardState::standard());
}

// ============================================================================
// Capture Tests
// ============================================================================

#[test]
fn test_pawn_exchange_on_d5() {
    let mut driver = Driver::new(ChessGame::default());
    driver.play("e2", "e4");
    driver.play("d7", "d5");

    let black_pawn = driver.game.board().piece_at(sq("d5")).unwrap().id;
    driver.play("e4", "d5");

    let game = &driver.game;
    assert!(game.board().piece(black_pawn).unwrap().captured);
    let occupant = game.board().piece_at(sq("d5")).unwrap();
    assert_eq!(occupant.color, PieceColor::White);
    assert_eq!(occupant.kind, PieceKind::Pawn);
    assert_eq!(game.captured_pieces().len(), 1);
    assert_eq!(game.board().live_count(), 31);
    assert_eq!(game.history().last_move().unwrap().notation(), "e4xd5");
    assert_one_piece_per_square(game.board());
}

#[test]
fn test_fifth_capture_starts_second_row() {
    let board = BoardState::from_pieces(&[
        (PieceKind::Rook, PieceColor::White, sq("a1")),
        (PieceKind::King, PieceColor::White, sq("e1")),
        (PieceKind::King, PieceColor::Black, sq("h8")),
        (PieceKind::Pawn, PieceColor::Black, sq("a2")),
        (PieceKind::Pawn, PieceColor::Black, sq("a3")),
        (PieceKind::Pawn, PieceColor::Black, sq("a4")),
        (PieceKind::Pawn, PieceColor::Black, sq("a5")),
        (PieceKind::Pawn, PieceColor::Black, sq("a6")),
    ]);
    let mut driver = Driver::new(ChessGame::with_board(ChessConfig::default(), board));

    driver.play("a1", "a2");
    driver.play("h8", "g8");
    driver.play("a2", "a3");
    driver.play("g8", "h8");
    driver.play("a3", "a4");
    driver.play("h8", "g8");
    driver.play("a4", "a5");
    driver.play("g8", "h8");
    driver.play("a5", "a6");

    let captured = driver.game.captured_pieces();
    assert_eq!(captured.count_of(PieceColor::Black), 5);
    let fifth = captured.entries()[4];
    assert_eq!(fifth.slot, 4);

    let config = driver.game.config();
    assert_eq!(config.capture.slot(fifth.slot), (1, 0));

    let parked = driver.game.pose(fifth.piece).unwrap();
    let expected = config
        .capture
        .offboard_position(PieceColor::Black, 4, &config.geometry);
    assert_eq!(parked, expected);
    assert!((parked.x - 4.0).abs() < 1e-5);
    assert!((parked.z - 26.5).abs() < 1e-5);
    assert_eq!(captured.material_advantage(), 5);
}

#[test]
fn test_sliding_capture_stops_at_enemy() {
    let mut driver = Driver::new(ChessGame::default());
    driver.play("e2", "e4");
    driver.play("d7", "d5");
    driver.play("e4", "d5");
    driver.play("d8", "d5");

    // Queen on d5: down the file it sees d4, d3 and then takes on d2
    let queen = driver.game.board().piece_at(sq("d5")).unwrap().id;
    let moves = driver.game.possible_moves(queen).unwrap();
    assert!(moves.contains(&sq("d2")));
    assert!(!moves.contains(&sq("d1")), "ray must stop on the first enemy");
    assert!(moves.contains(&sq("a2")));
    assert!(moves.contains(&sq("d8")), "the vacated file is open behind the queen");
}

// ============================================================================
// Rejected Move Tests
// ============================================================================

#[test]
fn test_execute_move_errors() {
    let mut game = ChessGame::default();
    let rook = game.board().piece_at(sq("a1")).unwrap().id;

    assert_eq!(
        game.execute_move(rook, sq("a3")),
        Err(GameError::IllegalMove { piece: rook, to: sq("a3") }),
        "rook is blocked by its own pawn"
    );

    let black_knight = game.board().piece_at(sq("b8")).unwrap().id;
    assert_eq!(
        game.execute_move(black_knight, sq("c6")),
        Err(GameError::NotYourTurn { piece: black_knight })
    );

    game.execute_move(PieceId(12), sq("e4")).unwrap();
    assert_eq!(
        game.execute_move(PieceId(11), sq("d4")),
        Err(GameError::AnimationInFlight)
    );
    assert_eq!(game.history().len(), 1);
}
