//! Chess game logic
//!
//! Pure game state lives in [`ChessGame`]; the Bevy side is a thin layer of
//! systems that feed it picks and copy its poses onto entities.
//!
//! # Module Organization
//!
//! - `types` - Board coordinates ([`Square`])
//! - `components` - Piece records and ECS markers
//! - `rules` - Board store and pseudo-legal move generation
//! - `resources` - Turn, selection, captures, history, animation state
//! - `chess_game` - Selection state machine and move executor
//! - `events` - Messages in and out of the game
//! - `systems` / `system_sets` / `plugin` - Bevy integration

pub mod chess_game;
pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use chess_game::{ChessGame, PickOutcome};
pub use components::{Piece, PieceColor, PieceId, PieceKind, PieceVisual, SelectedPiece};
pub use error::{GameError, GameResult};
pub use events::{GameEvent, NewGame, PickEvent, PickTarget};
pub use plugin::ChessGamePlugin;
pub use resources::{HighlightedSquares, MoveRecord, PieceHandles};
pub use rules::BoardState;
pub use system_sets::GameSystems;
pub use types::Square;
