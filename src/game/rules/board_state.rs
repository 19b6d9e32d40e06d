//! Board state representation for move generation and execution
//!
//! The board is a flat store of every piece created for the game. Squares
//! have no entity of their own; occupancy is answered by scanning live pieces.

use crate::game::components::{Piece, PieceColor, PieceId, PieceKind};
use crate::game::types::{Square, BOARD_DIM};

/// Back rank layout from the a-file to the h-file
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Every piece of a game, live or captured
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pieces: Vec<Piece>,
}

impl BoardState {
    /// Standard 32-piece starting position
    ///
    /// White's pieces get ids 0..16 (back rank a→h, then pawns a→h) and
    /// Black's get 16..32 in the same order.
    pub fn standard() -> Self {
        let mut board = BoardState::default();
        for color in [PieceColor::White, PieceColor::Black] {
            for (file, kind) in BACK_ROW.iter().enumerate() {
                board.push(*kind, color, Square::from_raw(file as u8, color.back_rank()));
            }
            for file in 0..BOARD_DIM {
                board.push(PieceKind::Pawn, color, Square::from_raw(file, color.pawn_rank()));
            }
        }
        board
    }

    /// Board holding only the given pieces, ids assigned in order
    ///
    /// Later entries on an already occupied square are skipped so the
    /// one-piece-per-square invariant holds for any input.
    pub fn from_pieces(pieces: &[(PieceKind, PieceColor, Square)]) -> Self {
        let mut board = BoardState::default();
        for &(kind, color, square) in pieces {
            if board.is_empty(square) {
                board.push(kind, color, square);
            }
        }
        board
    }

    fn push(&mut self, kind: PieceKind, color: PieceColor, square: Square) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece::new(id, kind, color, square));
        id
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0 as usize)
    }

    /// All pieces including captured ones, in id order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live_pieces().count()
    }

    /// Live piece standing on `square`
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.live_pieces().find(|p| p.square == square)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<PieceColor> {
        self.piece_at(square).map(|p| p.color)
    }

    pub fn is_empty_board(&self) -> bool {
        self.pieces.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Text diagram with rank 8 on top, `.` for empty squares
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(8 * 9);
        for rank in (0..BOARD_DIM).rev() {
            for file in 0..BOARD_DIM {
                let symbol = self
                    .piece_at(Square::from_raw(file, rank))
                    .map(|p| p.kind.symbol(p.color))
                    .unwrap_or('.');
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
