//! Chess piece movement rules
//!
//! Generates pseudo-legal destinations for each piece kind. Pure functions of
//! board occupancy; nothing here looks at check.

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceColor, PieceKind};
use crate::game::types::Square;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Get all possible destinations for a live piece
///
/// Order follows direction iteration; callers only rely on it for
/// deterministic output.
pub fn get_possible_moves(piece: &Piece, board_state: &BoardState) -> Vec<Square> {
    let mut moves = Vec::new();
    let from = piece.square;
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn_moves(from, color, board_state, &mut moves),
        PieceKind::Rook => slide(from, color, &ROOK_DIRECTIONS, board_state, &mut moves),
        PieceKind::Bishop => slide(from, color, &BISHOP_DIRECTIONS, board_state, &mut moves),
        PieceKind::Queen => {
            slide(from, color, &ROOK_DIRECTIONS, board_state, &mut moves);
            slide(from, color, &BISHOP_DIRECTIONS, board_state, &mut moves);
        }
        PieceKind::Knight => step(from, color, KNIGHT_OFFSETS.iter().copied(), board_state, &mut moves),
        PieceKind::King => step(from, color, king_offsets(), board_state, &mut moves),
    }

    moves
}

/// Check if `to` is reachable by `piece` on this board
pub fn is_valid_move(piece: &Piece, to: Square, board_state: &BoardState) -> bool {
    get_possible_moves(piece, board_state).contains(&to)
}

fn pawn_moves(from: Square, color: PieceColor, board_state: &BoardState, moves: &mut Vec<Square>) {
    let direction = color.forward();

    // Double step only when the single step is free too
    if let Some(one) = from.offset(0, direction) {
        if board_state.is_empty(one) {
            moves.push(one);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = from.offset(0, 2 * direction) {
                    if board_state.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dx in [-1, 1] {
        if let Some(target) = from.offset(dx, direction) {
            if board_state.color_at(target) == Some(color.opponent()) {
                moves.push(target);
            }
        }
    }
}

fn slide(
    from: Square,
    color: PieceColor,
    directions: &[(i8, i8)],
    board_state: &BoardState,
    moves: &mut Vec<Square>,
) {
    for &(dx, dy) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dx, dy) {
            match board_state.color_at(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

fn step(
    from: Square,
    color: PieceColor,
    offsets: impl Iterator<Item = (i8, i8)>,
    board_state: &BoardState,
    moves: &mut Vec<Square>,
) {
    for (dx, dy) in offsets {
        if let Some(target) = from.offset(dx, dy) {
            if board_state.color_at(target) != Some(color) {
                moves.push(target);
            }
        }
    }
}

fn king_offsets() -> impl Iterator<Item = (i8, i8)> {
    (-1..=1)
        .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
}
