//! Keyboard and mouse wiring.
//!
//! Maps raw winit events to the camera's semantic operations. Input mutates
//! the camera directly and synchronously; the next render observes the
//! latest state.

use crate::camera::{Camera, Direction};
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Map a physical key to a pan direction. WASD and the arrow keys both
/// work; anything else is not a pan key.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Apply one key press or release to the camera. Unmapped keys are ignored.
pub fn handle_key(camera: &mut Camera, key: KeyCode, pressed: bool) {
    if let Some(direction) = direction_for_key(key) {
        camera.set_key(direction, pressed);
        return;
    }

    // Zoom steps trigger on press only
    if pressed {
        match key {
            KeyCode::BracketLeft => camera.zoom_out(),
            KeyCode::BracketRight => camera.zoom_in(),
            _ => {}
        }
    }
}

/// Apply a scroll wheel delta: scrolling up zooms in, down zooms out.
pub fn handle_scroll(camera: &mut Camera, delta: MouseScrollDelta) {
    let scroll = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };
    if scroll > 0.0 {
        camera.zoom_in();
    } else if scroll < 0.0 {
        camera.zoom_out();
    }
}
