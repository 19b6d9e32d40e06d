//! Piece records and piece-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::types::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank direction pawns of this color advance in
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank pawns of this color start on
    pub fn pawn_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("white"),
            PieceColor::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in pawns (king counts as zero)
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// FEN-style letter, uppercase for White
    pub fn symbol(self, color: PieceColor) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

/// Stable identity of a piece in the board store
///
/// Ids are indices into the store and never get reused while a game lives;
/// captured pieces keep theirs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chess piece and its mutable game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub square: Square,
    /// Terminal flag; a captured piece stays in the store
    pub captured: bool,
    /// Set by the first move; no rule consumes it yet
    pub has_moved: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, color: PieceColor, square: Square) -> Self {
        Self {
            id,
            kind,
            color,
            square,
            captured: false,
            has_moved: false,
        }
    }

    pub fn is_live(&self) -> bool {
        !self.captured
    }
}

/// Links a render entity to the piece it displays
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceVisual {
    pub piece: PieceId,
}

/// Marker on the visual of the currently selected piece
#[derive(Component, Clone, Copy, Debug)]
pub struct SelectedPiece;
