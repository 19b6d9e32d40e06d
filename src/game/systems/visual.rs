//! Game event publishing
//!
//! Drains the events queued by [`ChessGame`] and re-emits them as
//! [`GameEvent`] messages. Selection and highlight changes are also applied
//! to the ECS side: the [`SelectedPiece`] marker and [`HighlightedSquares`].

use bevy::prelude::*;

use crate::game::chess_game::ChessGame;
use crate::game::components::SelectedPiece;
use crate::game::events::GameEvent;
use crate::game::resources::{HighlightedSquares, PieceHandles};

pub fn publish_game_events(
    mut commands: Commands,
    mut game: ResMut<ChessGame>,
    mut writer: MessageWriter<GameEvent>,
    mut highlights: ResMut<HighlightedSquares>,
    handles: Res<PieceHandles>,
    selected: Query<Entity, With<SelectedPiece>>,
) {
    let mut selection_change = None;
    for event in game.drain_events() {
        match &event {
            GameEvent::SelectionChanged { piece } => selection_change = Some(*piece),
            GameEvent::HighlightChanged { squares } => highlights.0.clone_from(squares),
            _ => {}
        }
        writer.write(event);
    }

    // Only the last change of the frame decides which visual carries the marker
    if let Some(piece) = selection_change {
        for entity in &selected {
            commands.entity(entity).remove::<SelectedPiece>();
        }
        if let Some(entity) = piece.and_then(|id| handles.get(&id).copied()) {
            commands.entity(entity).insert(SelectedPiece);
        }
    }
}
