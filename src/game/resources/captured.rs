//! Captured pieces tracking
//!
//! Keeps captures in the order they happened and hands out each piece's
//! off-board display slot. Also used for the material score.
//!
//! # Display Slots
//!
//! Each color has its own grid beside the board. The n-th piece of a color
//! to be captured (counting from 0) goes to slot n, laid out
//! [`CaptureLayout::per_row`] to a row, so slots depend only on
//! `(color, captures of that color so far)`.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use crate::game::components::{PieceColor, PieceId, PieceKind};

/// One capture, as recorded when it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureEntry {
    pub piece: PieceId,
    pub kind: PieceKind,
    /// Color of the captured piece
    pub color: PieceColor,
    /// Index in that color's off-board grid
    pub slot: usize,
}

/// Captured pieces of both colors in capture order
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CapturedPieces {
    entries: Vec<CaptureEntry>,
}

impl CapturedPieces {
    /// Record a capture and return its display slot index
    ///
    /// ```rust,ignore
    /// let slot = captured.add_capture(id, PieceKind::Queen, PieceColor::Black);
    /// assert_eq!(slot, 0); // first black piece taken
    /// ```
    pub fn add_capture(&mut self, piece: PieceId, kind: PieceKind, color: PieceColor) -> usize {
        let slot = self.count_of(color);
        self.entries.push(CaptureEntry {
            piece,
            kind,
            color,
            slot,
        });
        slot
    }

    /// Number of captured pieces of `color`
    pub fn count_of(&self, color: PieceColor) -> usize {
        self.entries.iter().filter(|e| e.color == color).count()
    }

    pub fn entries(&self) -> &[CaptureEntry] {
        &self.entries
    }

    /// Captured piece ids in capture order
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.entries.iter().map(|e| e.piece)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Material difference in pawn units
    pub fn material_advantage(&self) -> i32 {
        self.entries
            .iter()
            .map(|e| match e.color {
                // A black piece taken counts for White
                PieceColor::Black => e.kind.value(),
                PieceColor::White => -e.kind.value(),
            })
            .sum()
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
