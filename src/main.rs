#![allow(dead_code)]

mod app;
mod camera;
mod constants;
mod grid;
mod input;
mod projection;
mod renderer;
mod ui;

use camera::{Camera, CameraBounds};
use constants::*;
use grid::{Grid, Viewport};
use renderer::Renderer;
use std::time::Instant;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    egui_glow: EguiGlow,

    // Scene
    camera: Camera,
    grid: Grid,
    renderer: Renderer,

    // Overlay
    show_overlay: bool,
    last_frame_ms: f64,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let grid = Grid::new(GRID_DEFAULT_WIDTH, GRID_DEFAULT_HEIGHT);

        // The camera may pan over the whole grid and starts at its center
        let mut camera = Camera::new();
        camera.set_bounds(CameraBounds::new(
            0.0,
            grid.width() as f64,
            0.0,
            grid.height() as f64,
        ));
        camera.set_position(grid.width() as f64 / 2.0, grid.height() as f64 / 2.0);

        let renderer = Renderer::new(gl).expect("Failed to create renderer");

        let size = window.inner_size();
        renderer.resize(size.width as i32, size.height as i32);

        log::info!(
            "initialized {}x{} grid, window {}x{}",
            grid.width(),
            grid.height(),
            size.width,
            size.height
        );

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            egui_glow,
            camera,
            grid,
            renderer,
            show_overlay: false,
            last_frame_ms: 0.0,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.renderer.resize(size.width as i32, size.height as i32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                if key == KeyCode::Backquote {
                                    state.show_overlay = !state.show_overlay;
                                }
                                input::handle_key(&mut state.camera, key, true);
                            }
                            ElementState::Released => {
                                input::handle_key(&mut state.camera, key, false);
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed.consumed {
                    input::handle_scroll(&mut state.camera, delta);
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases never arrive after focus loss
                state.camera.release_all_keys();
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        let current_time = Instant::now();
        let dt_ms = (current_time - self.last_frame_time).as_secs_f64() * 1000.0;
        self.last_frame_time = current_time;
        self.last_frame_ms = dt_ms;

        // Advance held-direction panning
        self.camera.update(dt_ms);

        // Culling works in logical pixels; the GL viewport covers scaling
        let size = self.window.inner_size();
        let scale_factor = self.window.scale_factor();
        let viewport = Viewport::new(
            size.width as f64 / scale_factor,
            size.height as f64 / scale_factor,
        );

        self.renderer.render(&self.camera, &self.grid, viewport);

        // Debug overlay
        let stats = self.show_overlay.then(|| ui::FrameStats {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            scale_factor,
            camera_position: self.camera.position(),
            zoom: self.camera.zoom(),
            visible_tiles: self.grid.visible_range(&self.camera, viewport).count(),
            frame_ms: self.last_frame_ms,
        });
        self.egui_glow.run(&self.window, |ctx| {
            if let Some(stats) = &stats {
                ui::draw_debug_overlay(ctx, stats);
            }
        });
        self.egui_glow.paint(&self.window);

        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }
}
