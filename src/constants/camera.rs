//! Camera-related constants.

/// Default camera speed (tiles per reference frame interval)
pub const CAMERA_DEFAULT_SPEED: f64 = 2.0;
/// Reference frame interval in milliseconds (60 updates per second).
/// Movement is normalized against this so behavior is frame-rate independent.
pub const FRAME_REFERENCE_MS: f64 = 16.67;
/// Per-axis multiplier when two orthogonal directions are held (cos 45°),
/// so diagonal speed equals axis-aligned speed
pub const DIAGONAL_FACTOR: f64 = 0.707;
