//! Isometric projection constants.

/// Base tile width in pixels at zoom level 0
pub const BASE_TILE_WIDTH: f64 = 64.0;
/// Base tile height in pixels at zoom level 0 (2:1 isometric ratio)
pub const BASE_TILE_HEIGHT: f64 = 32.0;
/// Tile-size multiplier per zoom level: 0 = far, 1 = medium, 2 = close
pub const ZOOM_MULTIPLIERS: [f64; 3] = [1.0, 1.5, 2.0];
/// Lowest zoom level
pub const ZOOM_MIN: i32 = 0;
/// Highest zoom level
pub const ZOOM_MAX: i32 = ZOOM_MULTIPLIERS.len() as i32 - 1;
