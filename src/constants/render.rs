//! Rendering constants.

/// Extra tiles drawn around the computed visible range so partially
/// visible tiles at the viewport edge never pop in or out
pub const CULL_MARGIN: i64 = 5;
/// Grid outline color (RGBA)
pub const GRID_LINE_COLOR: [f32; 4] = [0.29, 0.337, 0.408, 1.0];
/// Grid outline width in pixels
pub const GRID_LINE_WIDTH: f32 = 1.0;
/// Background clear color (RGBA)
pub const CLEAR_COLOR: [f32; 4] = [0.07, 0.09, 0.12, 1.0];
