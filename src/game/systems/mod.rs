//! Chess game systems
//!
//! Thin ECS wrappers around [`crate::game::ChessGame`]. All rules live in the
//! game itself; systems only move messages in and transforms out.
//!
//! - [`input`] - [`crate::game::PickEvent`] handling
//! - [`movement`] - Animation tick and transform updates
//! - [`visual`] - [`crate::game::GameEvent`] publishing
//! - [`game_init`] - Visual spawning and [`crate::game::NewGame`] handling

pub mod game_init;
pub mod input;
pub mod movement;
pub mod visual;

pub use game_init::{handle_new_game, spawn_piece_visuals};
pub use input::handle_pick_events;
pub use movement::advance_animations;
pub use visual::publish_game_events;
