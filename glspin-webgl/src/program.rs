//! Shader-program build pipeline: compile two stages, link them, resolve
//! the named bind points.
//!
//! Build outcomes are explicit values. This module never logs; the
//! caller decides whether to log, retry, or propagate a failure.

use std::fmt;

use thiserror::Error;
use web_sys::{WebGlProgram, WebGlRenderingContext, WebGlShader, WebGlUniformLocation};

/// Name of the per-vertex position attribute in the vertex stage.
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
/// Name of the model-view matrix uniform in the vertex stage.
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

/// Pipeline stage a shader source targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    fn gl_enum(self) -> u32 {
        match self {
            StageKind::Vertex => WebGlRenderingContext::VERTEX_SHADER,
            StageKind::Fragment => WebGlRenderingContext::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => f.write_str("vertex"),
            StageKind::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("failed to create {0} shader object")]
    CreateShader(StageKind),
    /// The compiler rejected the stage source; `log` is its diagnostic.
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: StageKind, log: String },
    #[error("failed to create program object")]
    CreateProgram,
    /// The compiled stages could not be linked (interface mismatch, …).
    #[error("program failed to link: {log}")]
    Link { log: String },
    #[error("attribute {0:?} not found in linked program")]
    MissingAttribute(&'static str),
    #[error("uniform {0:?} not found in linked program")]
    MissingUniform(&'static str),
    #[error("failed to create vertex buffer object")]
    CreateBuffer,
}

/// Compile one shader stage.
///
/// On failure the shader object is deleted and the compiler's info log is
/// carried in the returned error.
pub fn compile_stage(
    gl: &WebGlRenderingContext,
    stage: StageKind,
    source: &str,
) -> Result<WebGlShader, ProgramError> {
    let shader = gl
        .create_shader(stage.gl_enum())
        .ok_or(ProgramError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| String::from("unknown compile error"));
    gl.delete_shader(Some(&shader));
    Err(ProgramError::Compile { stage, log })
}

/// Link two compiled stages into one program.
///
/// On failure the program object is deleted and the linker's info log is
/// carried in the returned error.
pub fn link(
    gl: &WebGlRenderingContext,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, ProgramError> {
    let program = gl.create_program().ok_or(ProgramError::CreateProgram)?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let log = gl
        .get_program_info_log(&program)
        .unwrap_or_else(|| String::from("unknown link error"));
    gl.delete_program(Some(&program));
    Err(ProgramError::Link { log })
}

/// A linked program plus its resolved bind points.
///
/// Exists only if both stages compiled, linking succeeded, and both named
/// bind points resolved.
pub struct LinkedProgram {
    pub program: WebGlProgram,
    /// Location of the position attribute.
    pub position_attrib: u32,
    /// Location of the model-view matrix uniform.
    pub model_view_uniform: WebGlUniformLocation,
}

impl LinkedProgram {
    /// Compile both stages, link, and resolve the bind points.
    ///
    /// No retry on failure; the first error is terminal for this build.
    pub fn build(
        gl: &WebGlRenderingContext,
        vs_source: &str,
        fs_source: &str,
    ) -> Result<Self, ProgramError> {
        let vertex = compile_stage(gl, StageKind::Vertex, vs_source)?;
        let fragment = match compile_stage(gl, StageKind::Fragment, fs_source) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(Some(&vertex));
                return Err(e);
            }
        };

        let program = link(gl, &vertex, &fragment);
        // The program owns the stages once linked; the shader objects are
        // no longer needed either way.
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));
        let program = program?;

        let position_attrib = gl.get_attrib_location(&program, POSITION_ATTRIBUTE);
        if position_attrib < 0 {
            return Err(ProgramError::MissingAttribute(POSITION_ATTRIBUTE));
        }
        let model_view_uniform = gl
            .get_uniform_location(&program, MODEL_VIEW_UNIFORM)
            .ok_or(ProgramError::MissingUniform(MODEL_VIEW_UNIFORM))?;

        Ok(Self {
            program,
            position_attrib: position_attrib as u32,
            model_view_uniform,
        })
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_kind_display() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }

    #[test]
    fn test_compile_error_carries_diagnostic() {
        let err = ProgramError::Compile {
            stage: StageKind::Fragment,
            log: "ERROR: 0:1: 'frag_color' : undeclared identifier".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("fragment shader failed to compile"));
        assert!(msg.contains("undeclared identifier"));
    }

    #[test]
    fn test_link_error_carries_diagnostic() {
        let err = ProgramError::Link {
            log: "varying mismatch".into(),
        };
        assert!(err.to_string().contains("varying mismatch"));
    }

    #[test]
    fn test_missing_bind_point_names() {
        let attr = ProgramError::MissingAttribute(POSITION_ATTRIBUTE);
        assert!(attr.to_string().contains("aVertexPosition"));
        let uni = ProgramError::MissingUniform(MODEL_VIEW_UNIFORM);
        assert!(uni.to_string().contains("uModelViewMatrix"));
    }
}
