//! The chess game: board, turn, selection, and move execution
//!
//! [`ChessGame`] owns every piece of mutable game state. It is driven by two
//! inputs and nothing else:
//!
//! - [`ChessGame::on_pick`] - one resolved pointer click
//! - [`ChessGame::tick`] - the current time, once per frame
//!
//! # Selection Protocol
//!
//! ```text
//! Idle ──pick own piece──▶ PieceSelected ──pick legal target──▶ Animating ──last waypoint──▶ Idle
//!                            │    ▲                                                  (turn flips)
//!                            └────┘ pick another own piece / illegal target
//! ```
//!
//! Every pick that arrives while any piece is animating is ignored, including
//! a captured piece still on its way to the off-board grid. The board
//! itself is updated as soon as the move starts; only the turn flip and the
//! selection reset wait for the animation.
//!
//! Outgoing notifications are queued as [`GameEvent`]s and collected with
//! [`ChessGame::drain_events`].

use bevy::math::Vec3;
use bevy::prelude::Resource;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::{ChessConfig, MoveStyle};
use crate::game::components::{Piece, PieceColor, PieceId};
use crate::game::error::{GameError, GameResult};
use crate::game::events::{GameEvent, PickTarget};
use crate::game::resources::{
    CapturedPieces, CurrentTurn, MoveAnimation, MoveHistory, MoveRecord, Selection,
};
use crate::game::rules::{get_possible_moves, BoardState};
use crate::game::types::Square;

/// What a pick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// An own piece is now selected
    Selected(PieceId),
    /// The selected piece started moving
    MoveStarted(MoveRecord),
    /// Nothing changed
    Ignored,
    /// A move is still animating; the pick was dropped
    Busy,
}

/// Move whose animation gates the next turn
#[derive(Debug, Clone)]
struct PendingMove {
    record: MoveRecord,
    animation: MoveAnimation,
}

/// Complete state of one chess game, driven by picks and clock ticks
#[derive(Resource, Debug, Clone)]
pub struct ChessGame {
    config: ChessConfig,
    board: BoardState,
    turn: CurrentTurn,
    selection: Selection,
    captured: CapturedPieces,
    history: MoveHistory,
    pending: Option<PendingMove>,
    capture_animations: Vec<MoveAnimation>,
    /// Last sampled visual position of every piece
    poses: HashMap<PieceId, Vec3>,
    events: Vec<GameEvent>,
}

impl Default for ChessGame {
    fn default() -> Self {
        let mut game = Self::new(ChessConfig::default());
        game.initialize_pieces();
        game
    }
}

impl ChessGame {
    /// Empty game; call [`ChessGame::initialize_pieces`] to set up the board
    pub fn new(config: ChessConfig) -> Self {
        Self {
            config,
            board: BoardState::default(),
            turn: CurrentTurn::default(),
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            history: MoveHistory::default(),
            pending: None,
            capture_animations: Vec::new(),
            poses: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Game starting from an arbitrary position, White to move
    pub fn with_board(config: ChessConfig, board: BoardState) -> Self {
        let mut game = Self::new(config);
        game.install_board(board);
        game
    }

    /// Replace the pieces with the standard 32-piece layout
    ///
    /// Turn, selection, captures, history, and animations restart with the
    /// new board so nothing refers to the pieces it replaced.
    pub fn initialize_pieces(&mut self) {
        self.clear_progress();
        self.install_board(BoardState::standard());
        info!("[GAME] Initialized {} pieces", self.board.pieces().len());
    }

    fn install_board(&mut self, board: BoardState) {
        self.board = board;
        let geometry = &self.config.geometry;
        self.poses = self
            .board
            .pieces()
            .iter()
            .map(|p| (p.id, geometry.square_to_world(p.square)))
            .collect();
        self.events.push(GameEvent::BoardReset);
    }

    /// Drop all pieces and reset turn, selection, captures, and history
    pub fn cleanup(&mut self) {
        self.clear_progress();
        self.board.clear();
        self.poses.clear();
        self.events.clear();
        debug!("[GAME] Cleaned up game state");
    }

    fn clear_progress(&mut self) {
        self.turn = CurrentTurn::default();
        self.selection.clear();
        self.captured.clear();
        self.history.clear();
        self.pending = None;
        self.capture_animations.clear();
    }

    /// Full re-initialization: cleanup followed by a fresh layout
    pub fn reset(&mut self) {
        self.cleanup();
        self.initialize_pieces();
        self.events.push(GameEvent::HighlightChanged { squares: Vec::new() });
    }

    pub fn config(&self) -> &ChessConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn current_turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn current_player(&self) -> PieceColor {
        self.turn.color
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selection.selected.and_then(|id| self.board.piece(id))
    }

    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// True while the mover's animation has not reached its last waypoint
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// True while any piece, including a captured one, is still travelling
    ///
    /// Picks and moves are refused until this turns false.
    pub fn has_active_animations(&self) -> bool {
        self.pending.is_some() || !self.capture_animations.is_empty()
    }

    pub fn pose(&self, piece: PieceId) -> Option<Vec3> {
        self.poses.get(&piece).copied()
    }

    /// Pseudo-legal destinations of a live piece
    pub fn possible_moves(&self, piece: PieceId) -> GameResult<Vec<Square>> {
        let piece = self.live_piece(piece)?;
        Ok(get_possible_moves(piece, &self.board))
    }

    fn live_piece(&self, id: PieceId) -> GameResult<&Piece> {
        let piece = self
            .board
            .piece(id)
            .ok_or(GameError::PieceNotFound { piece: id })?;
        if piece.captured {
            return Err(GameError::PieceCaptured { piece: id });
        }
        Ok(piece)
    }

    /// Take the notifications queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed one resolved pointer click into the selection state machine
    ///
    /// `client` is the seat of the local player; when given, picks made
    /// while the other side is to move are ignored.
    pub fn on_pick(&mut self, target: PickTarget, client: Option<PieceColor>) -> PickOutcome {
        if self.has_active_animations() {
            debug!("[INPUT] Pick ignored while a piece is animating");
            return PickOutcome::Busy;
        }
        if client.is_some_and(|seat| seat != self.turn.color) {
            debug!("[INPUT] Pick ignored: {:?} is not to move", client);
            return PickOutcome::Ignored;
        }

        let Some((square, occupant)) = self.resolve(target) else {
            return PickOutcome::Ignored;
        };

        if let Some(piece) = occupant {
            if piece.color == self.turn.color {
                return self.select(piece.id);
            }
        }

        let Some(selected) = self.selection.selected else {
            return PickOutcome::Ignored;
        };
        if !self.selection.allows(square) {
            debug!("[INPUT] {} is not a destination of {}", square, selected);
            return PickOutcome::Ignored;
        }

        match self.execute_move(selected, square) {
            Ok(record) => PickOutcome::MoveStarted(record),
            Err(e) => {
                warn!("[INPUT] Selected move rejected: {}", e);
                PickOutcome::Ignored
            }
        }
    }

    /// Square a pick refers to and the live piece standing there
    fn resolve(&self, target: PickTarget) -> Option<(Square, Option<Piece>)> {
        match target {
            PickTarget::Piece(id) => self
                .board
                .piece(id)
                .filter(|p| p.is_live())
                .map(|p| (p.square, Some(*p))),
            PickTarget::Square(square) => Some((square, self.board.piece_at(square).copied())),
            PickTarget::Nothing => None,
        }
    }

    fn select(&mut self, id: PieceId) -> PickOutcome {
        let moves = match self.possible_moves(id) {
            Ok(moves) => moves,
            Err(e) => {
                warn!("[INPUT] Cannot select {}: {}", id, e);
                return PickOutcome::Ignored;
            }
        };
        if let Some(piece) = self.board.piece(id) {
            debug!(
                "[INPUT] Selected {:?} {:?} at {} ({} moves)",
                piece.color,
                piece.kind,
                piece.square,
                moves.len()
            );
        }
        self.selection.select(id, moves.clone());
        self.events.push(GameEvent::SelectionChanged { piece: Some(id) });
        self.events.push(GameEvent::HighlightChanged { squares: moves });
        PickOutcome::Selected(id)
    }

    /// Move `piece` to `to`, capturing whatever enemy stands there
    ///
    /// Fails without touching any state if a move is already animating, the
    /// piece is missing, captured, or not the mover's, or `to` is not one of
    /// its generated destinations. On success the board reflects the move
    /// immediately and the turn passes once [`ChessGame::tick`] finishes the
    /// animation.
    pub fn execute_move(&mut self, piece: PieceId, to: Square) -> GameResult<MoveRecord> {
        if self.has_active_animations() {
            return Err(GameError::AnimationInFlight);
        }
        let mover = *self.live_piece(piece)?;
        if mover.color != self.turn.color {
            return Err(GameError::NotYourTurn { piece });
        }
        if !get_possible_moves(&mover, &self.board).contains(&to) {
            return Err(GameError::IllegalMove { piece, to });
        }

        let captured = self
            .board
            .piece_at(to)
            .filter(|p| p.color != mover.color)
            .copied();
        if let Some(victim) = captured {
            self.capture(victim);
        }

        if let Some(moved) = self.board.piece_mut(piece) {
            moved.square = to;
            moved.has_moved = true;
        }

        let record = MoveRecord {
            piece,
            kind: mover.kind,
            color: mover.color,
            from: mover.square,
            to,
            captured: captured.map(|p| (p.id, p.kind)),
        };
        self.history.add_move(record);

        let animation = self.move_animation(piece, mover.square, to);
        self.events.push(GameEvent::AnimationStarted {
            piece,
            waypoints: animation.waypoints().to_vec(),
        });
        self.pending = Some(PendingMove { record, animation });

        info!(
            "[MOVE] {:?} {:?} {}",
            mover.color,
            mover.kind,
            record.notation()
        );
        Ok(record)
    }

    /// Move the selected piece to `to`
    pub fn move_selected(&mut self, to: Square) -> GameResult<MoveRecord> {
        let piece = self.selection.selected.ok_or(GameError::NoSelection)?;
        self.execute_move(piece, to)
    }

    fn capture(&mut self, victim: Piece) {
        if let Some(piece) = self.board.piece_mut(victim.id) {
            piece.captured = true;
        }
        let slot = self.captured.add_capture(victim.id, victim.kind, victim.color);
        let offboard = self
            .config
            .capture
            .offboard_position(victim.color, slot, &self.config.geometry);

        let from = self.current_pose(victim.id, victim.square);
        let animation = MoveAnimation::direct(
            victim.id,
            from,
            offboard,
            Duration::from_millis(self.config.animation.capture_ms),
        );
        self.events.push(GameEvent::PieceCaptured {
            piece: victim.id,
            slot,
            offboard,
        });
        self.events.push(GameEvent::AnimationStarted {
            piece: victim.id,
            waypoints: animation.waypoints().to_vec(),
        });
        self.capture_animations.push(animation);

        info!(
            "[CAPTURE] {:?} {:?} on {} -> slot {}",
            victim.color, victim.kind, victim.square, slot
        );
    }

    fn current_pose(&self, piece: PieceId, square: Square) -> Vec3 {
        self.pose(piece)
            .unwrap_or_else(|| self.config.geometry.square_to_world(square))
    }

    fn move_animation(&self, piece: PieceId, from: Square, to: Square) -> MoveAnimation {
        let geometry = &self.config.geometry;
        let settings = &self.config.animation;
        let from = self.current_pose(piece, from);
        let target = geometry.square_to_world(to);
        let duration = Duration::from_millis(settings.move_ms);

        match settings.style {
            MoveStyle::Arc => MoveAnimation::arc(piece, from, target, geometry.lift_height(), duration),
            MoveStyle::Direct => MoveAnimation::direct(piece, from, target, duration),
        }
    }

    /// Advance every animation to `now` and return the poses that moved
    ///
    /// When the mover reaches its last waypoint the turn passes to the other
    /// player and the selection is cleared.
    pub fn tick(&mut self, now: Duration) -> Vec<(PieceId, Vec3)> {
        let mut updated = Vec::new();

        self.capture_animations.retain_mut(|animation| {
            let (position, done) = animation.sample(now);
            self.poses.insert(animation.piece(), position);
            updated.push((animation.piece(), position));
            !done
        });

        let finished = match self.pending.as_mut() {
            Some(pending) => {
                let (position, done) = pending.animation.sample(now);
                self.poses.insert(pending.record.piece, position);
                updated.push((pending.record.piece, position));
                done
            }
            None => false,
        };

        if finished {
            if let Some(pending) = self.pending.take() {
                self.complete_move(pending.record);
            }
        }

        updated
    }

    fn complete_move(&mut self, record: MoveRecord) {
        self.turn.switch();
        self.selection.clear();
        self.events.push(GameEvent::SelectionChanged { piece: None });
        self.events.push(GameEvent::HighlightChanged { squares: Vec::new() });
        self.events.push(GameEvent::MoveCompleted { record });
        self.events.push(GameEvent::TurnChanged {
            color: self.turn.color,
            move_number: self.turn.move_number,
        });
        info!(
            "[TURN] {:?} to move - Move #{}",
            self.turn.color, self.turn.move_number
        );
    }
}
