//! Piece visual spawning and new-game handling
//!
//! Every piece in [`ChessGame`] gets one entity carrying a [`PieceVisual`]
//! and a [`Transform`] at the piece's pose. [`PieceHandles`] maps pieces back
//! to those entities. White pieces are turned half a revolution to face
//! their opponent.

use bevy::prelude::*;
use std::f32::consts::PI;
use tracing::info;

use crate::game::chess_game::ChessGame;
use crate::game::components::{PieceColor, PieceVisual};
use crate::game::events::NewGame;
use crate::game::resources::{HighlightedSquares, PieceHandles};

/// Startup system creating the initial visuals
pub fn spawn_piece_visuals(
    mut commands: Commands,
    game: Res<ChessGame>,
    mut handles: ResMut<PieceHandles>,
) {
    spawn_visuals(&mut commands, &game, &mut handles);
}

/// Throw away the current game when a [`NewGame`] request arrives
pub fn handle_new_game(
    mut requests: MessageReader<NewGame>,
    mut commands: Commands,
    mut game: ResMut<ChessGame>,
    mut handles: ResMut<PieceHandles>,
    mut highlights: ResMut<HighlightedSquares>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for (_, entity) in handles.drain() {
        commands.entity(entity).despawn();
    }
    highlights.clear();
    game.reset();
    spawn_visuals(&mut commands, &game, &mut handles);
    info!("[GAME_INIT] New game started");
}

fn spawn_visuals(commands: &mut Commands, game: &ChessGame, handles: &mut PieceHandles) {
    let geometry = &game.config().geometry;
    for piece in game.board().pieces() {
        let translation = game
            .pose(piece.id)
            .unwrap_or_else(|| geometry.square_to_world(piece.square));
        let mut transform = Transform::from_translation(translation);
        if piece.color == PieceColor::White {
            transform.rotate_y(PI);
        }

        let entity = commands
            .spawn((
                Name::new(format!("{} {:?} {}", piece.color, piece.kind, piece.square)),
                PieceVisual { piece: piece.id },
                transform,
            ))
            .id();
        handles.insert(piece.id, entity);
    }
    info!("[GAME_INIT] Spawned {} piece visuals", handles.len());
}
