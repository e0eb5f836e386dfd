//! Isometric projection math.
//!
//! Converts between isometric grid coordinates and screen pixel offsets.
//! All functions are pure; the zoom level selects a discrete tile-size
//! multiplier rather than scaling continuously.

use crate::constants::*;
use glam::DVec2;

/// Tile pixel size at the given zoom level. Out-of-range zoom values are
/// clamped to the multiplier table.
pub fn tile_size(zoom: i32) -> DVec2 {
    let m = ZOOM_MULTIPLIERS[zoom.clamp(ZOOM_MIN, ZOOM_MAX) as usize];
    DVec2::new(BASE_TILE_WIDTH * m, BASE_TILE_HEIGHT * m)
}

/// Project an isometric grid coordinate to a screen pixel offset.
///
/// Moving +1 in iso x goes right-and-down on screen; +1 in iso y goes
/// left-and-down (the standard 2:1 shear-and-rotate transform).
pub fn iso_to_screen(iso: DVec2, zoom: i32) -> DVec2 {
    let tile = tile_size(zoom);
    DVec2::new(
        (iso.x - iso.y) * (tile.x / 2.0),
        (iso.x + iso.y) * (tile.y / 2.0),
    )
}

/// Exact algebraic inverse of [`iso_to_screen`].
pub fn screen_to_iso(screen: DVec2, zoom: i32) -> DVec2 {
    let tile = tile_size(zoom);
    let half_w = tile.x / 2.0;
    let half_h = tile.y / 2.0;
    DVec2::new(
        (screen.x / half_w + screen.y / half_h) / 2.0,
        (screen.y / half_h - screen.x / half_w) / 2.0,
    )
}
