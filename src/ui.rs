//! Debug overlay.

use glam::DVec2;

/// Per-frame numbers shown in the overlay.
pub struct FrameStats {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scale_factor: f64,
    pub camera_position: DVec2,
    pub zoom: i32,
    pub visible_tiles: usize,
    pub frame_ms: f64,
}

/// Draw the debug overlay in the top-left corner.
pub fn draw_debug_overlay(ctx: &egui::Context, stats: &FrameStats) {
    egui::Area::new(egui::Id::new("debug_overlay"))
        .fixed_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_black_alpha(160))
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.monospace(format!(
                        "viewport: {:.0}x{:.0} (scale {:.2})",
                        stats.viewport_width, stats.viewport_height, stats.scale_factor
                    ));
                    ui.monospace(format!(
                        "camera: ({:.2}, {:.2})  zoom: {}",
                        stats.camera_position.x, stats.camera_position.y, stats.zoom
                    ));
                    ui.monospace(format!(
                        "tiles: {}  frame: {:.2} ms",
                        stats.visible_tiles, stats.frame_ms
                    ));
                });
        });
}
