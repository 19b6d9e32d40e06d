//! Chess rules module - Pure game logic without ECS coupling
//!
//! Move generation and board state management as plain functions and data,
//! so the rules can be tested without an `App`.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece kind
//! - `board_state` - Piece store and occupancy queries
//!
//! Moves are pseudo-legal: a move that leaves the mover's king attacked is
//! still generated. Castling, en passant and promotion are not part of the
//! rule set.

pub mod board_state;
pub mod piece_moves;


pub use board_state::BoardState;
pub use piece_moves::{get_possible_moves, is_valid_move};
