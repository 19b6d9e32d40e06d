//! Messages crossing the boundary between the game and its host
//!
//! [`PickEvent`] and [`NewGame`] flow in from the picking layer or UI.
//! [`GameEvent`] flows out: the core queues them while it runs and the
//! plugin forwards them as Bevy messages for renderers to consume.

use bevy::prelude::*;

use crate::game::components::{PieceColor, PieceId};
use crate::game::resources::{MoveRecord, Waypoint};
use crate::game::types::Square;

/// What the pointer landed on, as resolved by the picking layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Piece(PieceId),
    Square(Square),
    Nothing,
}

/// One resolved pointer click
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickEvent {
    pub target: PickTarget,
    /// Seat of the local player in networked play; `None` plays both sides
    pub client: Option<PieceColor>,
}

impl PickEvent {
    pub fn new(target: PickTarget) -> Self {
        Self { target, client: None }
    }

    pub fn square(square: Square) -> Self {
        Self::new(PickTarget::Square(square))
    }

    pub fn piece(piece: PieceId) -> Self {
        Self::new(PickTarget::Piece(piece))
    }
}

/// Request to throw the current game away and set up the board again
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct NewGame;

/// Notifications from the game to renderers and UI
#[derive(Message, Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Replaces the full set of highlighted squares
    HighlightChanged { squares: Vec<Square> },
    SelectionChanged { piece: Option<PieceId> },
    /// A piece visual should follow these waypoints from where it stands
    AnimationStarted { piece: PieceId, waypoints: Vec<Waypoint> },
    PieceCaptured { piece: PieceId, slot: usize, offboard: Vec3 },
    /// The mover reached its destination
    MoveCompleted { record: MoveRecord },
    TurnChanged { color: PieceColor, move_number: u32 },
    /// Pieces were recreated in the starting position
    BoardReset,
}
