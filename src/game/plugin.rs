//! Game plugin - registers the chess game with a Bevy app
//!
//! # Resources
//!
//! - [`ChessGame`] - inserted fully initialized from the plugin's config
//! - [`PieceHandles`], [`HighlightedSquares`] - render-side bookkeeping
//! - [`Time`] - initialized when the host has not provided one, so headless
//!   apps can drive the clock by hand
//!
//! # Messages
//!
//! [`PickEvent`] and [`NewGame`] in; [`GameEvent`] out.
//!
//! # System Organization
//!
//! Systems are assigned to [`GameSystems`] sets chained in `Update`:
//! `Input` → `Execution` → `Visual`.

use bevy::prelude::*;
use tracing::info;

use super::chess_game::ChessGame;
use super::events::{GameEvent, NewGame, PickEvent};
use super::resources::{HighlightedSquares, PieceHandles};
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::ChessConfig;

/// Chess game plugin
#[derive(Debug, Clone, Default)]
pub struct ChessGamePlugin {
    pub config: ChessConfig,
}

impl ChessGamePlugin {
    pub fn new(config: ChessConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ChessGamePlugin {
    fn build(&self, app: &mut App) {
        let mut game = ChessGame::new(self.config.clone());
        game.initialize_pieces();
        info!(
            "[CONFIG] Board {} units, {:?} moves over {} ms",
            self.config.geometry.board_size,
            self.config.animation.style,
            self.config.animation.move_ms
        );

        app.insert_resource(game)
            .init_resource::<PieceHandles>()
            .init_resource::<HighlightedSquares>();

        if !app.world().contains_resource::<Time>() {
            app.init_resource::<Time>();
        }

        app.add_message::<PickEvent>()
            .add_message::<NewGame>()
            .add_message::<GameEvent>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_piece_visuals);
        app.add_systems(
            Update,
            (
                (handle_new_game, handle_pick_events)
                    .chain()
                    .in_set(GameSystems::Input),
                advance_animations.in_set(GameSystems::Execution),
                publish_game_events.in_set(GameSystems::Visual),
            ),
        );
    }
}
