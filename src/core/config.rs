//! Game configuration
//!
//! World-space board geometry, the captured-piece layout and animation
//! timing. Everything is serializable so it can live in `chess.json`
//! (see [`super::settings_persistence`]).
//!
//! Defaults reproduce the Nexus chess room: a 40-unit board whose squares are
//! 5 units wide, sitting on a floor at `y = -25`.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use crate::game::components::PieceColor;
use crate::game::types::Square;

/// Top-level configuration for a [`crate::game::ChessGame`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChessConfig {
    pub geometry: BoardGeometry,
    pub capture: CaptureLayout,
    pub animation: AnimationSettings,
}

impl ChessConfig {
    /// Reject values that would produce a degenerate board or animation
    pub fn validate(&self) -> CoreResult<()> {
        let g = &self.geometry;
        if !(g.board_size.is_finite() && g.board_size > 0.0) {
            return Err(invalid(format!("board_size must be positive, got {}", g.board_size)));
        }
        if !(g.piece_height.is_finite() && g.piece_height > 0.0) {
            return Err(invalid(format!("piece_height must be positive, got {}", g.piece_height)));
        }
        if !(0.0..=1.0).contains(&g.lift_fraction) {
            return Err(invalid(format!("lift_fraction must be within 0..=1, got {}", g.lift_fraction)));
        }
        if self.capture.per_row == 0 {
            return Err(invalid("capture.per_row must be at least 1".to_string()));
        }
        if self.animation.move_ms == 0 || self.animation.capture_ms == 0 {
            return Err(invalid("animation durations must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::InvalidConfig { message }
}

/// World-space dimensions of the board and pieces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Edge length of the whole board
    pub board_size: f32,
    /// Floor height of the chess room
    pub floor_y: f32,
    /// Height of the board surface above the floor
    pub board_surface_offset: f32,
    /// Height of a resting piece's origin above the board surface
    pub piece_base_height: f32,
    pub piece_height: f32,
    /// Apex of an arc move, as a fraction of `piece_height`
    pub lift_fraction: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        let board_size = 40.0;
        Self {
            board_size,
            floor_y: -25.0,
            board_surface_offset: 0.5,
            piece_base_height: 1.2,
            piece_height: board_size / 8.0 * 1.5,
            lift_fraction: 0.25,
        }
    }
}

impl BoardGeometry {
    pub fn square_size(&self) -> f32 {
        self.board_size / 8.0
    }

    /// Height of a piece's origin when it stands on the board
    pub fn rest_height(&self) -> f32 {
        self.floor_y + self.board_surface_offset + self.piece_base_height
    }

    pub fn lift_height(&self) -> f32 {
        self.rest_height() + self.piece_height * self.lift_fraction
    }

    /// World position of a piece resting on `square`, board centered on the origin
    pub fn square_to_world(&self, square: Square) -> Vec3 {
        let size = self.square_size();
        Vec3::new(
            (square.file() as f32 - 3.5) * size,
            self.rest_height(),
            (square.rank() as f32 - 3.5) * size,
        )
    }
}

/// Grid captured pieces are parked on beside the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureLayout {
    /// Distance of each color's grid from the board's center line
    pub side_offset: f32,
    /// Gap between the board's near edge and the first row
    pub margin: f32,
    pub spacing: f32,
    pub per_row: usize,
}

impl Default for CaptureLayout {
    fn default() -> Self {
        Self {
            side_offset: 4.0,
            margin: 5.0,
            spacing: 1.5,
            per_row: 4,
        }
    }
}

impl CaptureLayout {
    /// (row, column) of the n-th captured piece of one color, 0-based
    pub fn slot(&self, index: usize) -> (usize, usize) {
        let per_row = self.per_row.max(1);
        (index / per_row, index % per_row)
    }

    /// World position of the captured piece at `index` in its color's grid
    ///
    /// White pieces go on the negative-x side, Black pieces on the positive.
    pub fn offboard_position(&self, color: PieceColor, index: usize, geometry: &BoardGeometry) -> Vec3 {
        let (row, column) = self.slot(index);
        let side = match color {
            PieceColor::White => -self.side_offset,
            PieceColor::Black => self.side_offset,
        };
        Vec3::new(
            side + column as f32 * self.spacing,
            geometry.rest_height(),
            geometry.board_size / 2.0 + self.margin + row as f32 * self.spacing,
        )
    }
}

/// How a moving piece travels to its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoveStyle {
    /// Lift to an apex over the midpoint, then descend
    #[default]
    Arc,
    /// Straight interpolation from start to destination
    Direct,
}

impl std::str::FromStr for MoveStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arc" => Ok(MoveStyle::Arc),
            "direct" => Ok(MoveStyle::Direct),
            other => Err(format!("unknown move style '{other}', expected 'arc' or 'direct'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub style: MoveStyle,
    /// Total duration of a move, split evenly between arc phases
    pub move_ms: u64,
    /// Duration of a captured piece's trip to its off-board slot
    pub capture_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            style: MoveStyle::Arc,
            move_ms: 300,
            capture_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_style_parses() {
        assert_eq!("arc".parse::<MoveStyle>(), Ok(MoveStyle::Arc));
        assert_eq!("Direct".parse::<MoveStyle>(), Ok(MoveStyle::Direct));
        assert!("teleport".parse::<MoveStyle>().is_err());
    }

    #[test]
    fn test_default_geometry() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.square_size(), 5.0);
        assert_eq!(geometry.piece_height, 7.5);
        assert!((geometry.rest_height() - (-23.3)).abs() < 1e-5);
        assert!((geometry.lift_height() - geometry.rest_height() - 1.875).abs() < 1e-5);
    }

    #[test]
    fn test_square_to_world_centers_board() {
        let geometry = BoardGeometry::default();
        let a1 = geometry.square_to_world(Square::new(0, 0).unwrap());
        let h8 = geometry.square_to_world(Square::new(7, 7).unwrap());

        assert_eq!(a1.x, -17.5);
        assert_eq!(a1.z, -17.5);
        assert_eq!(h8.x, 17.5);
        assert_eq!(h8.z, 17.5);
        assert_eq!(a1.y, geometry.rest_height());
    }

    #[test]
    fn test_capture_slot_rows_of_four() {
        let layout = CaptureLayout::default();
        assert_eq!(layout.slot(0), (0, 0));
        assert_eq!(layout.slot(3), (0, 3));
        assert_eq!(layout.slot(4), (1, 0));
        assert_eq!(layout.slot(9), (2, 1));
    }

    #[test]
    fn test_offboard_position_sides() {
        let layout = CaptureLayout::default();
        let geometry = BoardGeometry::default();

        let white = layout.offboard_position(PieceColor::White, 5, &geometry);
        assert_eq!(white.x, -4.0 + 1.5);
        assert_eq!(white.z, 20.0 + 5.0 + 1.5);

        let black = layout.offboard_position(PieceColor::Black, 0, &geometry);
        assert_eq!(black.x, 4.0);
        assert_eq!(black.z, 25.0);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        assert!(ChessConfig::default().validate().is_ok());

        let mut config = ChessConfig::default();
        config.capture.per_row = 0;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig { .. })));

        let mut config = ChessConfig::default();
        config.geometry.board_size = -1.0;
        assert!(config.validate().is_err());

        let mut config = ChessConfig::default();
        config.animation.move_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_uses_defaults_for_missing_fields() {
        let config: ChessConfig =
            serde_json::from_str(r#"{ "animation": { "style": "direct" } }"#).unwrap();
        assert_eq!(config.animation.style, MoveStyle::Direct);
        assert_eq!(config.animation.move_ms, 300);
        assert_eq!(config.geometry, BoardGeometry::default());
    }
}
