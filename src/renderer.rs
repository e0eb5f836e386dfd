//! OpenGL line renderer for the isometric grid.
//!
//! Tiles in the visible range are drawn as diamond outlines. Vertices are
//! rebuilt each frame in logical pixel coordinates and drawn with a single
//! LINES call through an orthographic pixel-space projection.

use crate::camera::Camera;
use crate::constants::*;
use crate::grid::{Grid, Viewport};
use crate::projection;
use glam::DVec2;
use glow::*;
use std::mem;
use std::sync::Arc;

const LINE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;

void main() {
    gl_Position = uProjection * vec4(aPos, 0.0, 1.0);
}
"#;

const LINE_FRAGMENT_SHADER: &str = r#"#version 330 core
uniform vec4 uColor;
out vec4 FragColor;

void main() {
    FragColor = uColor;
}
"#;

pub struct Renderer {
    gl: Arc<glow::Context>,
    program: NativeProgram,
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    projection_loc: NativeUniformLocation,
    color_loc: NativeUniformLocation,
    vertex_scratch: Vec<f32>,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, String> {
        unsafe {
            let vertex_shader = gl
                .create_shader(VERTEX_SHADER)
                .map_err(|e| format!("Failed to create vertex shader: {}", e))?;
            gl.shader_source(vertex_shader, LINE_VERTEX_SHADER);
            gl.compile_shader(vertex_shader);
            if !gl.get_shader_compile_status(vertex_shader) {
                return Err(gl.get_shader_info_log(vertex_shader));
            }

            let fragment_shader = gl
                .create_shader(FRAGMENT_SHADER)
                .map_err(|e| format!("Failed to create fragment shader: {}", e))?;
            gl.shader_source(fragment_shader, LINE_FRAGMENT_SHADER);
            gl.compile_shader(fragment_shader);
            if !gl.get_shader_compile_status(fragment_shader) {
                return Err(gl.get_shader_info_log(fragment_shader));
            }

            let program = gl
                .create_program()
                .map_err(|e| format!("Failed to create program: {}", e))?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                return Err(gl.get_program_info_log(program));
            }

            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            let projection_loc = gl
                .get_uniform_location(program, "uProjection")
                .ok_or("Failed to get projection uniform location")?;
            let color_loc = gl
                .get_uniform_location(program, "uColor")
                .ok_or("Failed to get color uniform location")?;

            let vao = gl
                .create_vertex_array()
                .map_err(|e| format!("Failed to create VAO: {}", e))?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(vbo));

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

            gl.bind_vertex_array(None);

            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);

            Ok(Self {
                gl,
                program,
                vao,
                vbo,
                projection_loc,
                color_loc,
                vertex_scratch: Vec::new(),
            })
        }
    }

    /// Match the GL viewport to the physical framebuffer size.
    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    /// Clear the frame and draw every tile in the camera's visible range
    /// as a diamond outline.
    pub fn render(&mut self, camera: &Camera, grid: &Grid, viewport: Viewport) {
        let zoom = camera.zoom();
        let cam = camera.position();
        let center = DVec2::new(viewport.width / 2.0, viewport.height / 2.0);
        let tile = projection::tile_size(zoom);
        let range = grid.visible_range(camera, viewport);

        self.vertex_scratch.clear();
        for (x, y) in range.tiles() {
            let relative = DVec2::new(x as f64 - cam.x, y as f64 - cam.y);
            let pos = center + projection::iso_to_screen(relative, zoom);
            push_diamond(&mut self.vertex_scratch, pos, tile);
        }

        unsafe {
            self.gl.clear(COLOR_BUFFER_BIT);

            if self.vertex_scratch.is_empty() {
                return;
            }

            self.gl.use_program(Some(self.program));
            self.gl.bind_vertex_array(Some(self.vao));

            self.gl.bind_buffer(ARRAY_BUFFER, Some(self.vbo));
            self.gl.buffer_data_u8_slice(
                ARRAY_BUFFER,
                as_u8_slice(&self.vertex_scratch),
                DYNAMIC_DRAW,
            );

            // Logical-pixel orthographic projection, y down like the
            // coordinate space the vertices are built in
            let ortho = glam::Mat4::orthographic_rh(
                0.0,
                viewport.width as f32,
                viewport.height as f32,
                0.0,
                -1.0,
                1.0,
            );
            self.gl
                .uniform_matrix_4_f32_slice(Some(&self.projection_loc), false, ortho.as_ref());
            self.gl
                .uniform_4_f32_slice(Some(&self.color_loc), &GRID_LINE_COLOR);

            self.gl.line_width(GRID_LINE_WIDTH);
            self.gl
                .draw_arrays(LINES, 0, (self.vertex_scratch.len() / 2) as i32);

            self.gl.bind_vertex_array(None);
        }
    }
}

/// Append the four edges of one tile diamond as LINES segments.
///
/// `pos` is the projected top vertex; right, bottom, and left vertices
/// follow from the zoom-scaled tile size.
fn push_diamond(vertices: &mut Vec<f32>, pos: DVec2, tile: DVec2) {
    let half_w = tile.x / 2.0;
    let half_h = tile.y / 2.0;
    let top = [pos.x as f32, pos.y as f32];
    let right = [(pos.x + half_w) as f32, (pos.y + half_h) as f32];
    let bottom = [pos.x as f32, (pos.y + tile.y) as f32];
    let left = [(pos.x - half_w) as f32, (pos.y + half_h) as f32];

    for edge in [[top, right], [right, bottom], [bottom, left], [left, top]] {
        for point in edge {
            vertices.extend_from_slice(&point);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(data.as_ptr() as *const u8, data.len() * mem::size_of::<T>())
    }
}
