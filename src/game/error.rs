//! Error types for game module
//!
//! Raised by the fail-fast [`crate::game::ChessGame`] API. The pick-driven
//! state machine never surfaces them; it ignores bad input instead.

use crate::game::components::PieceId;
use crate::game::types::Square;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Destination is not among the piece's generated moves
    #[error("Illegal move: piece {piece} cannot move to {to}")]
    IllegalMove { piece: PieceId, to: Square },

    /// No piece with this id exists in the current game
    #[error("Piece not found: {piece}")]
    PieceNotFound { piece: PieceId },

    /// The piece was already captured
    #[error("Piece {piece} has been captured")]
    PieceCaptured { piece: PieceId },

    /// The piece does not belong to the player to move
    #[error("Piece {piece} does not belong to the player to move")]
    NotYourTurn { piece: PieceId },

    /// A move animation has not finished yet
    #[error("A move is still animating")]
    AnimationInFlight,

    /// A move destination arrived with no piece selected
    #[error("No piece is selected")]
    NoSelection,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
