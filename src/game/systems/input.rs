//! Pick handling
//!
//! Forwards every [`PickEvent`] to [`ChessGame::on_pick`] in arrival order.
//! Selecting and moving in the same frame works because each pick sees the
//! state left by the one before it.

use bevy::prelude::*;
use tracing::{debug, trace};

use crate::game::chess_game::{ChessGame, PickOutcome};
use crate::game::events::PickEvent;

pub fn handle_pick_events(mut picks: MessageReader<PickEvent>, mut game: ResMut<ChessGame>) {
    for pick in picks.read() {
        match game.on_pick(pick.target, pick.client) {
            PickOutcome::Selected(piece) => debug!("[INPUT] Pick {:?} selected {}", pick.target, piece),
            PickOutcome::MoveStarted(record) => {
                debug!("[INPUT] Pick {:?} started {}", pick.target, record.notation())
            }
            PickOutcome::Busy => debug!("[INPUT] Pick {:?} dropped, animation in flight", pick.target),
            PickOutcome::Ignored => trace!("[INPUT] Pick {:?} ignored", pick.target),
        }
    }
}
