//! Turn tracking
//!
//! Single source of truth for whose turn it is.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;

/// Tracks whose turn it currently is and the current move number
///
/// Move numbers follow chess notation: a move is White's turn plus Black's
/// reply, so the counter increments only after Black completes a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Switch to the other player's turn
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }
}
