//! The rectangle program: one static indexed mesh drawn with a flat-colour shader.

use std::sync::Arc;

use glam::{Vec3, Vec4, vec3};
use glow::HasContext;
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram, Vertex},
    error::GlError,
    other::UpdateContext,
    window::{Control, FrameEvent, Game},
};

const VERTEX_SHADER: &str = include_str!("shaders/rect/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/rect/frag.glsl");

pub const CLEAR_COLOR: Vec4 = Vec4::new(0.12, 0.13, 0.16, 1.0);

/// A vertex with only a position, bound to attribute location 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PositionVertex>() as i32;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
        }
    }
}

/// Corners of the rectangle.
pub const VERTICES: [PositionVertex; 4] = [
    PositionVertex { position: vec3(0.5, 0.5, 0.0) },   // top-right
    PositionVertex { position: vec3(0.5, -0.5, 0.0) },  // bottom-right
    PositionVertex { position: vec3(-0.5, -0.5, 0.0) }, // bottom-left
    PositionVertex { position: vec3(-0.5, 0.5, 0.0) },  // top-left
];

/// Two triangles: (0, 1, 3) and (1, 2, 3).
pub const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// GPU resources alive between load and unload.
struct Resources {
    mesh: Mesh,
    program: ShaderProgram,
}

/// Draws a single fixed rectangle every frame and quits when Escape is held.
#[derive(Default)]
pub struct RectangleGame {
    resources: Option<Resources>,
}

impl RectangleGame {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether the game should stop after this update.
fn quit_requested(ctx: &UpdateContext) -> bool {
    ctx.keyboard.is_down(Keycode::Escape)
}

impl Game for RectangleGame {
    fn on_load(&mut self, gl: &Arc<glow::Context>) -> Result<(), GlError> {
        unsafe {
            gl.clear_color(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, CLEAR_COLOR.w);
        }

        let mesh = Mesh::new(gl, &VERTICES, &INDICES, glow::TRIANGLES)?;
        let program = ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        log::info!("rectangle loaded ({} indices)", mesh.index_count());

        self.resources = Some(Resources { mesh, program });
        Ok(())
    }

    fn on_update(&mut self, ctx: &UpdateContext) -> Control {
        if quit_requested(ctx) {
            Control::Quit
        } else {
            Control::Continue
        }
    }

    fn on_render(&mut self, gl: &Arc<glow::Context>, _frame: FrameEvent) {
        unsafe {
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Some(resources) = &self.resources {
            resources.program.use_program();
            resources.mesh.draw();
        }
    }

    fn on_resize(&mut self, gl: &Arc<glow::Context>, width: u32, height: u32) {
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    fn on_unload(&mut self, _gl: &Arc<glow::Context>) {
        if self.resources.take().is_some() {
            log::debug!("rectangle resources released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::other::KeyboardState;

    fn frame() -> FrameEvent {
        FrameEvent { delta_time: 1.0 / 60.0 }
    }

    #[test]
    fn indices_reference_existing_vertices() {
        assert_eq!(INDICES.len() % 3, 0);
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
    }

    #[test]
    fn every_corner_is_used() {
        for corner in 0..VERTICES.len() as u32 {
            assert!(INDICES.contains(&corner), "corner {corner} is not drawn");
        }
    }

    #[test]
    fn triangles_cover_the_rectangle() {
        // Each triangle spans half of the 1x1 rectangle.
        let area: f32 = INDICES
            .chunks(3)
            .map(|tri| {
                let a = VERTICES[tri[0] as usize].position;
                let b = VERTICES[tri[1] as usize].position;
                let c = VERTICES[tri[2] as usize].position;
                (b - a).cross(c - a).length() / 2.0
            })
            .sum();
        assert!((area - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn triangles_share_winding() {
        let normals: Vec<f32> = INDICES
            .chunks(3)
            .map(|tri| {
                let a = VERTICES[tri[0] as usize].position;
                let b = VERTICES[tri[1] as usize].position;
                let c = VERTICES[tri[2] as usize].position;
                (b - a).cross(c - a).z
            })
            .collect();
        assert!(normals.iter().all(|z| z.signum() == normals[0].signum()));
    }

    #[test]
    fn vertex_is_three_tightly_packed_floats() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 3 * std::mem::size_of::<f32>());
        let bytes: &[u8] = bytemuck::cast_slice(&VERTICES);
        assert_eq!(bytes.len(), 4 * 12);
    }

    #[test]
    fn shaders_target_glsl_330_core() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos"));
        assert!(FRAGMENT_SHADER.contains("vec4(0.98, 0.50, 0.45, 1.0)"));
    }

    #[test]
    fn escape_quits() {
        let mut keyboard = KeyboardState::default();
        let mut game = RectangleGame::new();
        assert_eq!(game.on_update(&UpdateContext::new(&keyboard, frame())), Control::Continue);

        keyboard.press(Keycode::Escape);
        assert_eq!(game.on_update(&UpdateContext::new(&keyboard, frame())), Control::Quit);
    }

    #[test]
    fn other_keys_do_not_quit() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::Q);
        keyboard.press(Keycode::Return);
        let ctx = UpdateContext::new(&keyboard, frame());
        assert!(!quit_requested(&ctx));
    }
}
