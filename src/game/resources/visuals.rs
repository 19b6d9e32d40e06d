//! Render-side bookkeeping kept next to [`crate::game::ChessGame`]

use bevy::prelude::*;
use std::collections::HashMap;

use crate::game::components::PieceId;
use crate::game::types::Square;

/// Entity displaying each piece
#[derive(Resource, Debug, Default, Clone, Deref, DerefMut)]
pub struct PieceHandles(pub HashMap<PieceId, Entity>);

/// Squares currently lit up as destinations of the selected piece
#[derive(Resource, Debug, Default, Clone, PartialEq, Deref, DerefMut)]
pub struct HighlightedSquares(pub Vec<Square>);
