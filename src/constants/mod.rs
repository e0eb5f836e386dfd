//! Viewer constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod camera;
mod projection;
mod render;
mod window;

// Re-export all constants at the module level
pub use camera::*;
pub use projection::*;
pub use render::*;
pub use window::*;
