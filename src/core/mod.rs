//! Core module - configuration and application infrastructure
//!
//! - [`ChessConfig`] - board geometry, capture layout, animation timing
//! - [`settings_persistence`] - JSON config loading and saving
//! - [`CoreError`] - errors raised while handling config

pub mod config;
pub mod error;
pub mod settings_persistence;

pub use config::{AnimationSettings, BoardGeometry, CaptureLayout, ChessConfig, MoveStyle};
pub use error::{CoreError, CoreResult};
pub use settings_persistence::{default_config_path, load_config, read_config, save_config};
