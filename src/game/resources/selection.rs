//! Selection state for the click-to-move protocol

use crate::game::components::PieceId;
use crate::game::types::Square;

/// Currently selected piece and the destinations shown for it
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    pub selected: Option<PieceId>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, piece: PieceId, moves: Vec<Square>) {
        self.selected = Some(piece);
        self.possible_moves = moves;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn allows(&self, target: Square) -> bool {
        self.possible_moves.contains(&target)
    }
}
