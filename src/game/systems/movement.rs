//! Animation playback
//!
//! Samples the game's animations with the app clock and copies the sampled
//! positions onto the piece visuals.

use bevy::prelude::*;

use crate::game::chess_game::ChessGame;
use crate::game::components::PieceVisual;
use crate::game::resources::PieceHandles;

pub fn advance_animations(
    time: Res<Time>,
    mut game: ResMut<ChessGame>,
    handles: Res<PieceHandles>,
    mut visuals: Query<&mut Transform, With<PieceVisual>>,
) {
    if !game.has_active_animations() {
        return;
    }

    for (piece, position) in game.tick(time.elapsed()) {
        let Some(&entity) = handles.get(&piece) else {
            continue;
        };
        if let Ok(mut transform) = visuals.get_mut(entity) {
            transform.translation = position;
        }
    }
}
