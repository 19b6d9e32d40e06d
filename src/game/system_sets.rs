//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - New-game requests, then pointer picks
//! 2. **Execution** - Animation sampling, turn completion
//! 3. **Visual** - Outgoing messages, selection marker, highlights
//!
//! A pick that starts a move is therefore sampled in the same frame, which
//! pins the animation's start time to that frame.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Systems: new game handling, pick handling
    Input,

    /// Systems: animation tick and piece transforms
    Execution,

    /// Systems: game event publishing
    Visual,
}
