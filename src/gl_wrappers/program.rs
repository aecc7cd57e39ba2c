//! Exports [`Program`].
use std::ffi::CString;

use gl::types::GLuint;

use super::{GlApi, Shader};
use crate::{config::AttributeBinding, error::EngineError};

/// Wrapper for an OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
pub struct Program {
    /// The internal OpenGL id for this object.
    id: GLuint,
}

/// Everything needed to link a [`Program`].
pub struct ProgramArgs<'a> {
    /// A vertex shader.
    pub vert_shader: &'a Shader,
    /// A fragment shader.
    pub frag_shader: &'a Shader,
    /// Attribute slots fixed before linking.
    pub attribute_bindings: &'a [AttributeBinding],
}

impl Program {
    /// Create an empty program object.
    pub fn new(gl: &impl GlApi) -> Self {
        Self {
            id: gl.create_program(),
        }
    }

    /// Attach the shaders, bind the attribute slots, link, then detach again.
    ///
    /// The program object is kept either way. After a failed link it is
    /// unusable, but still owned by `self` and deleted by [`Program::delete`].
    ///
    /// # Errors
    /// Errors if linking was unsuccessful, with the response from OpenGL.
    /// Also errors if an attribute name contains an interior nul; nothing is
    /// linked in that case.
    pub fn link(&self, gl: &impl GlApi, args: ProgramArgs<'_>) -> Result<(), EngineError> {
        let names = args
            .attribute_bindings
            .iter()
            .map(|binding| CString::new(binding.name.as_str()).map(|name| (binding.index, name)))
            .collect::<Result<Vec<_>, _>>()?;

        gl.attach_shader(self.id, args.vert_shader.id());
        gl.attach_shader(self.id, args.frag_shader.id());
        for (index, name) in &names {
            gl.bind_attrib_location(self.id, *index, name);
        }
        gl.link_program(self.id);

        let result = if gl.program_linked(self.id) {
            Ok(())
        } else {
            Err(EngineError::ProgramLink {
                log: gl.program_info_log(self.id),
            })
        };

        gl.detach_shader(self.id, args.vert_shader.id());
        gl.detach_shader(self.id, args.frag_shader.id());
        result
    }

    /// Make this program current.
    pub fn bind(&self, gl: &impl GlApi) {
        gl.use_program(self.id);
    }

    pub fn delete(self, gl: &impl GlApi) {
        gl.delete_program(self.id);
    }

    /// Get the internal id of this program.
    pub fn id(&self) -> GLuint {
        self.id
    }
}
