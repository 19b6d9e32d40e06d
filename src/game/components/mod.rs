//! Chess game components module
//!
//! Piece records used by the pure rules plus the few ECS components the
//! plugin attaches to render entities.

pub mod piece;


pub use piece::*;
