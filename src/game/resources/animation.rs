//! Piece move animation state
//!
//! An animation is a start position plus an ordered list of waypoints. It
//! holds no clock of its own: the owner samples it with the current time and
//! the first sample latches the start time. Each segment eases in and out.

use bevy::math::Vec3;
use std::time::Duration;

use crate::game::components::PieceId;

/// One leg of an animation: travel to `position` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: Vec3,
    pub duration: Duration,
}

impl Waypoint {
    pub fn new(position: Vec3, duration: Duration) -> Self {
        Self { position, duration }
    }
}

/// Quadratic ease-in-out over `t` in `0..=1`
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Interpolation state for one piece's trip along its waypoints
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    piece: PieceId,
    start: Vec3,
    waypoints: Vec<Waypoint>,
    started_at: Option<Duration>,
}

impl MoveAnimation {
    pub fn new(piece: PieceId, start: Vec3, waypoints: Vec<Waypoint>) -> Self {
        Self {
            piece,
            start,
            waypoints,
            started_at: None,
        }
    }

    /// Single straight segment to `to`
    pub fn direct(piece: PieceId, from: Vec3, to: Vec3, duration: Duration) -> Self {
        Self::new(piece, from, vec![Waypoint::new(to, duration)])
    }

    /// Lift to `apex_y` above the midpoint, then descend onto `to`
    ///
    /// `duration` is split between the two phases.
    pub fn arc(piece: PieceId, from: Vec3, to: Vec3, apex_y: f32, duration: Duration) -> Self {
        let rise = duration / 2;
        let fall = duration - rise;
        let apex = Vec3::new((from.x + to.x) / 2.0, apex_y, (from.z + to.z) / 2.0);
        Self::new(
            piece,
            from,
            vec![Waypoint::new(apex, rise), Waypoint::new(to, fall)],
        )
    }

    pub fn piece(&self) -> PieceId {
        self.piece
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn total_duration(&self) -> Duration {
        self.waypoints.iter().map(|w| w.duration).sum()
    }

    /// Final position, or the start when there are no waypoints
    pub fn destination(&self) -> Vec3 {
        self.waypoints.last().map(|w| w.position).unwrap_or(self.start)
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Position at `now`, and whether the last waypoint has been reached
    pub fn sample(&mut self, now: Duration) -> (Vec3, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let mut remaining = now.saturating_sub(started_at);
        let mut from = self.start;

        for waypoint in &self.waypoints {
            if remaining < waypoint.duration {
                let t = remaining.as_secs_f32() / waypoint.duration.as_secs_f32();
                return (from.lerp(waypoint.position, ease_in_out_quad(t)), false);
            }
            remaining -= waypoint.duration;
            from = waypoint.position;
        }

        (self.destination(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out_quad(0.25) < 0.25, "should start slow");
        assert!(ease_in_out_quad(0.75) > 0.75, "should end slow");
    }

    #[test]
    fn test_direct_animation_progress() {
        let mut anim = MoveAnimation::direct(PieceId(0), Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), ms(300));
        assert!(!anim.has_started());

        // First sample latches the start time
        let (pos, done) = anim.sample(ms(1_000));
        assert_eq!(pos, Vec3::ZERO);
        assert!(!done);
        assert!(anim.has_started());

        let (pos, done) = anim.sample(ms(1_150));
        assert!((pos.x - 5.0).abs() < 1e-3);
        assert!(!done);

        let (pos, done) = anim.sample(ms(1_300));
        assert_eq!(pos, Vec3::new(10.0, 0.0, 0.0));
        assert!(done);
    }

    #[test]
    fn test_arc_animation_passes_apex() {
        let from = Vec3::new(0.0, 1.0, 0.0);
        let to = Vec3::new(4.0, 1.0, 8.0);
        let mut anim = MoveAnimation::arc(PieceId(3), from, to, 3.0, ms(300));

        assert_eq!(anim.waypoints().len(), 2);
        assert_eq!(anim.waypoints()[0].position, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(anim.waypoints()[0].duration, ms(150));
        assert_eq!(anim.waypoints()[1].duration, ms(150));
        assert_eq!(anim.total_duration(), ms(300));

        anim.sample(ms(0));
        let (apex, done) = anim.sample(ms(150));
        assert_eq!(apex, Vec3::new(2.0, 3.0, 4.0));
        assert!(!done);

        let (end, done) = anim.sample(ms(500));
        assert_eq!(end, to);
        assert!(done);
    }

    #[test]
    fn test_empty_animation_finishes_immediately() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut anim = MoveAnimation::new(PieceId(1), start, Vec::new());
        assert_eq!(anim.sample(ms(5)), (start, true));
    }

    #[test]
    fn test_sampling_before_start_clamps() {
        let mut anim = MoveAnimation::direct(PieceId(0), Vec3::ZERO, Vec3::ONE, ms(100));
        anim.sample(ms(50));
        // A clock going backwards never rewinds past the start
        let (pos, done) = anim.sample(ms(10));
        assert_eq!(pos, Vec3::ZERO);
        assert!(!done);
    }
}
