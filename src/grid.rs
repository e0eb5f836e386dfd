//! Grid dimensions and visible-tile culling.
//!
//! The grid is a pure width x height tile lattice with no per-cell payload.
//! `visible_range` is the culling step: it maps the viewport corners into
//! iso space, offsets by the camera, pads by the cull margin, and clamps to
//! the grid, yielding the half-open index ranges the renderer should draw.

use crate::camera::Camera;
use crate::constants::*;
use crate::projection;
use glam::DVec2;
use std::ops::Range;

/// Logical (device-pixel-ratio independent) viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Half-open tile index ranges to draw. Indices never exceed the grid
/// dimensions; a camera far outside the grid yields an empty range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRange {
    pub x: Range<u32>,
    pub y: Range<u32>,
}

impl TileRange {
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    pub fn count(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Iterate tile indices row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.y
            .clone()
            .flat_map(|y| self.x.clone().map(move |x| (x, y)))
    }
}

pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Compute the tile index ranges visible through the viewport.
    ///
    /// The four viewport corners (relative to the screen center) are mapped
    /// through the inverse projection to get an iso-space bounding box around
    /// the camera, which is then padded by [`CULL_MARGIN`] so partially
    /// visible tiles at the edge never pop, and clamped to the grid.
    pub fn visible_range(&self, camera: &Camera, viewport: Viewport) -> TileRange {
        let zoom = camera.zoom();
        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;

        let corners = [
            projection::screen_to_iso(DVec2::new(-half_w, -half_h), zoom),
            projection::screen_to_iso(DVec2::new(half_w, -half_h), zoom),
            projection::screen_to_iso(DVec2::new(-half_w, half_h), zoom),
            projection::screen_to_iso(DVec2::new(half_w, half_h), zoom),
        ];

        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }

        let cam = camera.position();
        TileRange {
            x: clamp_axis(min.x + cam.x, max.x + cam.x, self.width),
            y: clamp_axis(min.y + cam.y, max.y + cam.y, self.height),
        }
    }
}

/// Pad an iso-space interval by the cull margin and clamp it to `0..len`.
fn clamp_axis(min: f64, max: f64, len: u32) -> Range<u32> {
    let start = (min.floor() as i64 - CULL_MARGIN).clamp(0, len as i64) as u32;
    let end = (max.ceil() as i64 + CULL_MARGIN).clamp(0, len as i64) as u32;
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(x: f64, y: f64, zoom: i32) -> Camera {
        let mut camera = Camera::new();
        camera.set_position(x, y);
        camera.set_zoom(zoom);
        camera
    }

    #[test]
    fn test_center_tile_is_visible() {
        let grid = Grid::new(100, 100);
        let camera = camera_at(50.0, 50.0, 0);
        let range = grid.visible_range(&camera, Viewport::new(800.0, 600.0));
        assert!(range.x.contains(&50));
        assert!(range.y.contains(&50));
    }

    #[test]
    fn test_range_for_centered_camera() {
        // 800x600 at zoom 0: corners map to +/-15.625 in both iso axes,
        // so with the 5-tile margin the range is [29, 71) on each axis.
        let grid = Grid::new(100, 100);
        let camera = camera_at(50.0, 50.0, 0);
        let range = grid.visible_range(&camera, Viewport::new(800.0, 600.0));
        assert_eq!(range.x, 29..71);
        assert_eq!(range.y, 29..71);
    }

    #[test]
    fn test_range_never_leaves_grid() {
        let grid = Grid::new(100, 100);
        let positions = [
            (0.0, 0.0),
            (-20.0, -20.0),
            (99.0, 99.0),
            (150.0, 50.0),
            (50.0, -80.0),
        ];
        for zoom in 0..=2 {
            for &(x, y) in &positions {
                let camera = camera_at(x, y, zoom);
                let range = grid.visible_range(&camera, Viewport::new(1920.0, 1080.0));
                assert!(range.x.end <= 100, "x range {:?} escapes grid", range.x);
                assert!(range.y.end <= 100, "y range {:?} escapes grid", range.y);
                for (tx, ty) in range.tiles() {
                    assert!(tx < 100 && ty < 100);
                }
            }
        }
    }

    #[test]
    fn test_camera_far_outside_yields_empty_range() {
        let grid = Grid::new(100, 100);
        let camera = camera_at(10_000.0, 10_000.0, 0);
        let range = grid.visible_range(&camera, Viewport::new(800.0, 600.0));
        assert!(range.is_empty());
        assert_eq!(range.count(), 0);
        assert_eq!(range.tiles().count(), 0);
    }

    #[test]
    fn test_zero_viewport_does_not_fault() {
        // A degenerate viewport degrades to the margin window around the
        // camera, still clamped to the grid.
        let grid = Grid::new(100, 100);
        let camera = camera_at(50.0, 50.0, 0);
        let range = grid.visible_range(&camera, Viewport::new(0.0, 0.0));
        assert!(range.x.end <= 100 && range.y.end <= 100);
        assert!(range.x.contains(&50) && range.y.contains(&50));
    }

    #[test]
    fn test_higher_zoom_shows_fewer_tiles() {
        let grid = Grid::new(100, 100);
        let viewport = Viewport::new(800.0, 600.0);
        let far = grid
            .visible_range(&camera_at(50.0, 50.0, 0), viewport)
            .count();
        let close = grid
            .visible_range(&camera_at(50.0, 50.0, 2), viewport)
            .count();
        assert!(close < far, "zoom 2 drew {} tiles, zoom 0 drew {}", close, far);
    }

    #[test]
    fn test_tiles_iterates_row_major() {
        let range = TileRange { x: 1..3, y: 5..7 };
        let tiles: Vec<_> = range.tiles().collect();
        assert_eq!(tiles, vec![(1, 5), (2, 5), (1, 6), (2, 6)]);
    }
}
