//! The triangle pipeline — linked program, static vertex buffer, and the
//! single per-frame draw call.

use glspin_scene::{Mat4, TriangleVertex};
use web_sys::{WebGlBuffer, WebGlRenderingContext};

use crate::program::{LinkedProgram, ProgramError};

/// GLSL ES 1.00 sources, embedded at compile time.
pub const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
pub const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag");

/// Owns the program and the GPU-resident triangle geometry.
pub struct TrianglePipeline {
    program: LinkedProgram,
    vertex_buffer: WebGlBuffer,
}

impl TrianglePipeline {
    /// Build the program from the embedded sources, upload the 3 vertices
    /// once, and wire the position attribute. Everything here happens
    /// exactly once per mount.
    pub fn new(gl: &WebGlRenderingContext) -> Result<Self, ProgramError> {
        let program = LinkedProgram::build(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        gl.use_program(Some(&program.program));

        let vertex_buffer = gl.create_buffer().ok_or(ProgramError::CreateBuffer)?;
        gl.bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.buffer_data_with_u8_array(
            WebGlRenderingContext::ARRAY_BUFFER,
            bytemuck::cast_slice(&TriangleVertex::VERTICES),
            WebGlRenderingContext::STATIC_DRAW,
        );

        gl.enable_vertex_attrib_array(program.position_attrib);
        gl.vertex_attrib_pointer_with_i32(
            program.position_attrib,
            TriangleVertex::COMPONENTS,
            WebGlRenderingContext::FLOAT,
            false, // no normalization
            0,     // tight stride
            0,
        );

        Ok(Self {
            program,
            vertex_buffer,
        })
    }

    /// Upload the model-view matrix and draw the triangle.
    ///
    /// **One draw call** over the 3 vertices.
    pub fn draw(&self, gl: &WebGlRenderingContext, model_view: &Mat4) {
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.program.model_view_uniform),
            false,
            model_view.as_slice(),
        );
        gl.draw_arrays(
            WebGlRenderingContext::TRIANGLES,
            0,
            TriangleVertex::VERTICES.len() as i32,
        );
    }

    /// Access the linked program (for advanced usage).
    pub fn program(&self) -> &LinkedProgram {
        &self.program
    }

    /// The GPU-resident vertex buffer holding the triangle.
    pub fn vertex_buffer(&self) -> &WebGlBuffer {
        &self.vertex_buffer
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE};

    #[test]
    fn test_vertex_source_declares_bind_points() {
        assert!(VERTEX_SHADER.contains(&format!("attribute vec4 {POSITION_ATTRIBUTE}")));
        assert!(VERTEX_SHADER.contains(&format!("uniform mat4 {MODEL_VIEW_UNIFORM}")));
        assert!(VERTEX_SHADER.contains("gl_Position = uModelViewMatrix * aVertexPosition"));
    }

    #[test]
    fn test_fragment_source_is_constant_blue() {
        assert!(FRAGMENT_SHADER.contains("gl_FragColor = vec4(0.0, 0.0, 1.0, 1.0)"));
    }
}
