//! Exports [`Shader`] and [`ShaderType`].
use std::{ffi::CString, fmt};

use gl::types::GLuint;

use super::GlApi;
use crate::error::EngineError;

/// Represents the stage of a shader object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderType {
    /// This shader is a Vertex shader.
    Vertex,
    /// This shader is a Fragment shader.
    Fragment,
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Vertex => f.write_str("vertex"),
            ShaderType::Fragment => f.write_str("fragment"),
        }
    }
}

/// An OpenGL shader object together with its source code.
///
/// The object stays alive after a failed compile, so it can still be
/// attached to a program; the link will then report the failure.
pub struct Shader {
    /// GL ID for this shader.
    id: GLuint,
    stage: ShaderType,
    source: CString,
}

impl Shader {
    /// Create the GL shader object for `source`.
    ///
    /// # Errors
    /// Errors if `source` contains an interior nul. No GL object is created then.
    pub fn new(
        gl: &impl GlApi,
        stage: ShaderType,
        source: impl Into<Vec<u8>>,
    ) -> Result<Self, EngineError> {
        let source = CString::new(source)?;
        let id = gl.create_shader(stage);
        Ok(Self { id, stage, source })
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(gl: &impl GlApi, source: impl Into<Vec<u8>>) -> Result<Self, EngineError> {
        Self::new(gl, ShaderType::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(gl: &impl GlApi, source: impl Into<Vec<u8>>) -> Result<Self, EngineError> {
        Self::new(gl, ShaderType::Fragment, source)
    }

    /// Compile this shader.
    ///
    /// # Errors
    /// Errors if compilation was unsuccessful, with the response from OpenGL.
    pub fn compile(&self, gl: &impl GlApi) -> Result<(), EngineError> {
        gl.shader_source(self.id, &self.source);
        gl.compile_shader(self.id);
        if gl.shader_compiled(self.id) {
            return Ok(());
        }
        Err(EngineError::ShaderCompile {
            stage: self.stage,
            log: gl.shader_info_log(self.id),
        })
    }

    /// Delete the GL object. Safe to call while still attached to a linked program.
    pub fn delete(self, gl: &impl GlApi) {
        gl.delete_shader(self.id);
    }

    /// Get the internal GL ID of this shader.
    pub fn id(&self) -> GLuint {
        self.id
    }
    pub fn stage(&self) -> ShaderType {
        self.stage
    }
}
