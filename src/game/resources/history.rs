//! Move history

use serde::{Deserialize, Serialize};

use crate::game::components::{PieceColor, PieceId, PieceKind};
use crate::game::types::Square;

/// Move record for history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub from: Square,
    pub to: Square,
    pub captured: Option<(PieceId, PieceKind)>,
}

impl MoveRecord {
    /// Coordinate notation, e.g. `e2e4` or `e4xd5`
    pub fn notation(&self) -> String {
        let separator = if self.captured.is_some() { "x" } else { "" };
        format!("{}{}{}", self.from, separator, self.to)
    }
}

/// Moves in the order they were executed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_history_records_in_order() {
        let mut history = MoveHistory::default();
        assert!(history.last_move().is_none());

        let quiet = MoveRecord {
            piece: PieceId(12),
            kind: PieceKind::Pawn,
            color: PieceColor::White,
            from: sq("e2"),
            to: sq("e4"),
            captured: None,
        };
        let capture = MoveRecord {
            piece: PieceId(12),
            kind: PieceKind::Pawn,
            color: PieceColor::White,
            from: sq("e4"),
            to: sq("d5"),
            captured: Some((PieceId(27), PieceKind::Pawn)),
        };
        history.add_move(quiet);
        history.add_move(capture);

        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move(), Some(&capture));
        assert_eq!(quiet.notation(), "e2e4");
        assert_eq!(capture.notation(), "e4xd5");
    }
}
