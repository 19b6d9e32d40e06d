//! Chess game state pieces owned by [`crate::game::ChessGame`]
//!
//! # Categories
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Whose turn it is and the move number
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its destinations
//!
//! ## Game History
//! - [`MoveHistory`] - Executed moves in order
//! - [`CapturedPieces`] - Capture order, off-board slots, material
//!
//! ## Animation
//! - [`MoveAnimation`] - Waypoint interpolation sampled by the game tick
//!
//! ## Visual Bookkeeping
//! - [`PieceHandles`] - Piece to render entity mapping
//! - [`HighlightedSquares`] - Destination squares on display

pub mod animation;
pub mod captured;
pub mod history;
pub mod selection;
pub mod turn;
pub mod visuals;

pub use animation::*;
pub use captured::*;
pub use history::*;
pub use selection::*;
pub use turn::*;
pub use visuals::*;
