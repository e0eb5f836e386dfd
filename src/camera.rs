//! Camera state and per-frame movement.
//!
//! The camera lives in isometric grid space: its position is a real-valued
//! tile coordinate, and the host pans it by holding semantic directions.
//! All inputs are clamped rather than rejected; no operation here can fail.

use crate::constants::*;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Semantic pan direction. The host maps raw key events to these; unknown
/// keys are dropped before they reach the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which directions are currently held. Flags are independent; all four
/// held at once is a valid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Optional position limits, each side independently unconstrained when None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraBounds {
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
}

impl CameraBounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    position: DVec2,
    speed: f64,
    held: HeldDirections,
    bounds: CameraBounds,
    zoom: i32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            speed: CAMERA_DEFAULT_SPEED,
            held: HeldDirections::default(),
            bounds: CameraBounds::default(),
            zoom: ZOOM_MIN,
        }
    }

    /// Advance the camera by one frame's worth of held-direction motion.
    ///
    /// `dt_ms` is the elapsed time since the previous frame; speed is
    /// normalized against the 60 Hz reference interval so motion is
    /// frame-rate independent. Diagonal pairs are scaled by cos 45° so
    /// they are not 1.414x faster than axis-aligned movement.
    pub fn update(&mut self, dt_ms: f64) {
        let move_speed = self.speed * (dt_ms / FRAME_REFERENCE_MS);
        let diagonal = move_speed * DIAGONAL_FACTOR;

        let held = self.held;
        if held.up && held.left {
            self.position -= DVec2::splat(diagonal);
        } else if held.up && held.right {
            self.position += DVec2::new(diagonal, -diagonal);
        } else if held.down && held.left {
            self.position += DVec2::new(-diagonal, diagonal);
        } else if held.down && held.right {
            self.position += DVec2::splat(diagonal);
        } else {
            // Each axis applies independently; opposing directions held
            // together cancel to zero net motion.
            if held.up {
                self.position.y -= move_speed;
            }
            if held.down {
                self.position.y += move_speed;
            }
            if held.left {
                self.position.x -= move_speed;
            }
            if held.right {
                self.position.x += move_speed;
            }
        }

        self.clamp_position();
    }

    pub fn set_key(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.held.up = pressed,
            Direction::Down => self.held.down = pressed,
            Direction::Left => self.held.left = pressed,
            Direction::Right => self.held.right = pressed,
        }
    }

    /// Release every held direction (used when the window loses focus,
    /// since the matching key-release events will never arrive).
    pub fn release_all_keys(&mut self) {
        self.held = HeldDirections::default();
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
        self.clamp_position();
    }

    /// Replace all four bounds atomically, then re-clamp the current position.
    pub fn set_bounds(&mut self, bounds: CameraBounds) {
        self.bounds = bounds;
        self.clamp_position();
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step one zoom level closer, saturating at the maximum.
    pub fn zoom_in(&mut self) {
        if self.zoom < ZOOM_MAX {
            self.zoom += 1;
        }
    }

    /// Step one zoom level farther, saturating at the minimum.
    pub fn zoom_out(&mut self) {
        if self.zoom > ZOOM_MIN {
            self.zoom -= 1;
        }
    }

    fn clamp_position(&mut self) {
        if let Some(min_x) = self.bounds.min_x {
            self.position.x = self.position.x.max(min_x);
        }
        if let Some(max_x) = self.bounds.max_x {
            self.position.x = self.position.x.min(max_x);
        }
        if let Some(min_y) = self.bounds.min_y {
            self.position.y = self.position.y.max(min_y);
        }
        if let Some(max_y) = self.bounds.max_y {
            self.position.y = self.position.y.min(max_y);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_idle_camera_stays_put() {
        let mut camera = Camera::new();
        camera.update(16.67);
        assert_eq!(camera.position(), DVec2::ZERO);
    }

    #[test]
    fn test_single_axis_movement_normalized_by_dt() {
        let mut camera = Camera::new();
        camera.set_key(Direction::Right, true);
        camera.update(FRAME_REFERENCE_MS);
        // One reference frame moves exactly `speed` tiles
        assert!((camera.position().x - CAMERA_DEFAULT_SPEED).abs() < TOLERANCE);
        assert_eq!(camera.position().y, 0.0);

        // Half a reference frame moves half as far
        let mut camera = Camera::new();
        camera.set_key(Direction::Down, true);
        camera.update(FRAME_REFERENCE_MS / 2.0);
        assert!((camera.position().y - CAMERA_DEFAULT_SPEED / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        let dt = 33.4;

        let mut straight = Camera::new();
        straight.set_key(Direction::Right, true);
        straight.update(dt);
        let straight_dist = straight.position().length();

        let mut diagonal = Camera::new();
        diagonal.set_key(Direction::Down, true);
        diagonal.set_key(Direction::Right, true);
        diagonal.update(dt);
        let diagonal_dist = diagonal.position().length();

        // cos(45°) is stored to three decimal places, so compare with a
        // proportional tolerance rather than exactly
        assert!(
            (straight_dist - diagonal_dist).abs() < straight_dist * 1e-3,
            "axis {} vs diagonal {}",
            straight_dist,
            diagonal_dist
        );
    }

    #[test]
    fn test_all_diagonal_pairs_move_symmetrically() {
        let pairs = [
            (Direction::Up, Direction::Left, DVec2::new(-1.0, -1.0)),
            (Direction::Up, Direction::Right, DVec2::new(1.0, -1.0)),
            (Direction::Down, Direction::Left, DVec2::new(-1.0, 1.0)),
            (Direction::Down, Direction::Right, DVec2::new(1.0, 1.0)),
        ];
        for (a, b, sign) in pairs {
            let mut camera = Camera::new();
            camera.set_key(a, true);
            camera.set_key(b, true);
            camera.update(FRAME_REFERENCE_MS);
            let expected = sign * CAMERA_DEFAULT_SPEED * DIAGONAL_FACTOR;
            assert!(
                (camera.position() - expected).abs().max_element() < TOLERANCE,
                "{:?}+{:?} moved to {:?}",
                a,
                b,
                camera.position()
            );
        }
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut camera = Camera::new();
        camera.set_key(Direction::Up, true);
        camera.set_key(Direction::Down, true);
        camera.update(16.67);
        assert_eq!(camera.position(), DVec2::ZERO);

        let mut camera = Camera::new();
        camera.set_key(Direction::Left, true);
        camera.set_key(Direction::Right, true);
        camera.update(16.67);
        assert_eq!(camera.position(), DVec2::ZERO);
    }

    #[test]
    fn test_key_release_stops_motion() {
        let mut camera = Camera::new();
        camera.set_key(Direction::Right, true);
        camera.update(16.67);
        let after_press = camera.position();

        camera.set_key(Direction::Right, false);
        camera.update(16.67);
        assert_eq!(camera.position(), after_press);
    }

    #[test]
    fn test_release_all_keys() {
        let mut camera = Camera::new();
        camera.set_key(Direction::Right, true);
        camera.set_key(Direction::Down, true);
        camera.release_all_keys();
        camera.update(16.67);
        assert_eq!(camera.position(), DVec2::ZERO);
    }

    #[test]
    fn test_set_position_clamps_to_bounds() {
        let mut camera = Camera::new();
        camera.set_bounds(CameraBounds::new(0.0, 100.0, 0.0, 50.0));

        camera.set_position(-10.0, 25.0);
        assert_eq!(camera.position(), DVec2::new(0.0, 25.0));

        camera.set_position(250.0, 99.0);
        assert_eq!(camera.position(), DVec2::new(100.0, 50.0));
    }

    #[test]
    fn test_set_bounds_reclamps_current_position() {
        let mut camera = Camera::new();
        camera.set_position(80.0, 80.0);
        camera.set_bounds(CameraBounds::new(0.0, 40.0, 0.0, 40.0));
        assert_eq!(camera.position(), DVec2::new(40.0, 40.0));
    }

    #[test]
    fn test_update_respects_bounds() {
        let mut camera = Camera::new();
        camera.set_bounds(CameraBounds::new(0.0, 10.0, 0.0, 10.0));
        camera.set_key(Direction::Left, true);
        camera.set_key(Direction::Up, true);
        // Push against the corner for many frames
        for _ in 0..100 {
            camera.update(50.0);
            let pos = camera.position();
            assert!(pos.x >= 0.0 && pos.x <= 10.0);
            assert!(pos.y >= 0.0 && pos.y <= 10.0);
        }
        assert_eq!(camera.position(), DVec2::ZERO);
    }

    #[test]
    fn test_partial_bounds_leave_other_sides_free() {
        let mut camera = Camera::new();
        camera.set_bounds(CameraBounds {
            min_x: Some(0.0),
            ..Default::default()
        });
        camera.set_position(-5.0, -1000.0);
        assert_eq!(camera.position(), DVec2::new(0.0, -1000.0));
        camera.set_position(1e6, 1e6);
        assert_eq!(camera.position(), DVec2::new(1e6, 1e6));
    }

    #[test]
    fn test_zoom_steps_saturate() {
        let mut camera = Camera::new();
        assert_eq!(camera.zoom(), 0);
        for _ in 0..10 {
            camera.zoom_in();
        }
        assert_eq!(camera.zoom(), 2);
        for _ in 0..10 {
            camera.zoom_out();
        }
        assert_eq!(camera.zoom(), 0);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut camera = Camera::new();
        camera.set_zoom(99);
        assert_eq!(camera.zoom(), 2);
        camera.set_zoom(-4);
        assert_eq!(camera.zoom(), 0);
        camera.set_zoom(1);
        assert_eq!(camera.zoom(), 1);
    }

    #[test]
    fn test_state_serializes_round_trip() {
        let mut camera = Camera::new();
        camera.set_bounds(CameraBounds::new(0.0, 100.0, 0.0, 100.0));
        camera.set_position(12.5, 34.75);
        camera.set_zoom(1);
        camera.set_key(Direction::Right, true);

        let json = serde_json::to_string(&camera).unwrap();
        let restored: Camera = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.position(), camera.position());
        assert_eq!(restored.zoom(), camera.zoom());
        assert_eq!(restored.held, camera.held);
        assert_eq!(restored.bounds, camera.bounds);
    }
}
