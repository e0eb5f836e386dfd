//! Window and startup constants.

/// Default window width in pixels
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height in pixels
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
/// Grid width in tiles
pub const GRID_DEFAULT_WIDTH: u32 = 100;
/// Grid height in tiles
pub const GRID_DEFAULT_HEIGHT: u32 = 100;
