//! Exports [`GlApi`], the set of OpenGL entry points the engine calls.
use std::ffi::CStr;

use gl::types::{GLint, GLsizei, GLuint};

use super::ShaderType;

/// The OpenGL calls used by the engine, one method per GL entry point.
///
/// [`NativeGl`](super::NativeGl) forwards straight to the loaded driver.
/// Tests swap in a recorder so the call sequence can be checked
/// without a window or a context.
pub trait GlApi {
    fn create_shader(&self, stage: ShaderType) -> GLuint;
    fn shader_source(&self, shader: GLuint, source: &CStr);
    fn compile_shader(&self, shader: GLuint);
    /// `GL_COMPILE_STATUS` of `shader`.
    fn shader_compiled(&self, shader: GLuint) -> bool;
    fn shader_info_log(&self, shader: GLuint) -> String;
    fn delete_shader(&self, shader: GLuint);

    fn create_program(&self) -> GLuint;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr);
    fn link_program(&self, program: GLuint);
    /// `GL_LINK_STATUS` of `program`.
    fn program_linked(&self, program: GLuint) -> bool;
    fn program_info_log(&self, program: GLuint) -> String;
    fn use_program(&self, program: GLuint);
    fn delete_program(&self, program: GLuint);

    fn gen_vertex_array(&self) -> GLuint;
    fn bind_vertex_array(&self, vao: GLuint);
    fn gen_buffer(&self) -> GLuint;
    fn bind_array_buffer(&self, vbo: GLuint);
    /// Uploads `data` to the bound `GL_ARRAY_BUFFER` with `GL_STATIC_DRAW`.
    fn array_buffer_static_data(&self, data: &[f32]);
    fn enable_vertex_attrib_array(&self, index: GLuint);
    /// Describes attribute `index` as `components` tightly packed floats.
    fn vertex_attrib_pointer_f32(&self, index: GLuint, components: GLint);

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// Clears the colour and depth buffers.
    fn clear_color_and_depth(&self);
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn draw_triangles(&self, first: GLint, count: GLsizei);
}
