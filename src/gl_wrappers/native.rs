//! Exports [`NativeGl`].
use std::{
    ffi::{c_char, c_void, CStr},
    ptr::null,
};

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};

use super::{GlApi, ShaderType};

/// [`GlApi`] backed by the function pointers of the `gl` crate.
///
/// Only obtainable through [`NativeGl::load`], so every method can assume
/// the pointers are loaded and a context is current on this thread.
#[derive(Debug)]
pub struct NativeGl {
    _private: (),
}

impl NativeGl {
    /// Load the GL function pointers through `loader`.
    ///
    /// # Safety
    /// A GL context must be current on the calling thread, and must stay
    /// current for as long as the returned value is used.
    pub unsafe fn load(loader: impl FnMut(&'static str) -> *const c_void) -> Self {
        gl::load_with(loader);
        Self { _private: () }
    }

    /// Route driver debug messages to the logger, if the driver supports it.
    pub fn enable_debug_output(&self) {
        if !gl::DebugMessageCallback::is_loaded() {
            log::warn!("glDebugMessageCallback is unavailable, GL debug output stays off");
            return;
        }
        // SAFETY:
        // the callback is a plain fn and never touches the user param.
        unsafe {
            gl::Enable(gl::DEBUG_OUTPUT);
            gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
            gl::DebugMessageCallback(Some(gl_debug_output), null());
        }
        log::debug!("GL debug output enabled");
    }
}

extern "system" fn gl_debug_output(
    _source: GLenum,
    _output_type: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const c_char,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    // SAFETY:
    // the driver hands us `length` bytes of message, or a nul terminated
    // string when `length` is negative.
    let text = unsafe {
        match usize::try_from(length) {
            Ok(len) => String::from_utf8_lossy(std::slice::from_raw_parts(message.cast(), len))
                .into_owned(),
            Err(_) => CStr::from_ptr(message).to_string_lossy().into_owned(),
        }
    };
    match severity {
        gl::DEBUG_SEVERITY_HIGH | gl::DEBUG_SEVERITY_MEDIUM => {
            log::warn!("GL debug [{id}]: {text}")
        }
        _ => log::debug!("GL debug [{id}]: {text}"),
    }
}

/// Read an info log whose length is reported by `get_len` and whose text
/// is filled in by `get_log`.
fn read_info_log(
    get_len: impl FnOnce(&mut GLint),
    get_log: impl FnOnce(GLsizei, &mut GLsizei, *mut GLchar),
) -> String {
    let mut capacity: GLint = 0;
    get_len(&mut capacity);
    let capacity = usize::try_from(capacity).unwrap_or(0);
    if capacity == 0 {
        return String::new();
    }
    let mut infolog: Vec<u8> = vec![0; capacity];
    let mut length: GLsizei = 0;
    get_log(
        GLsizei::try_from(capacity).unwrap_or(GLsizei::MAX),
        &mut length,
        infolog.as_mut_ptr().cast(),
    );
    infolog.truncate(usize::try_from(length).unwrap_or(0));
    String::from_utf8_lossy(&infolog).trim_end().to_owned()
}

// SAFETY (for every block below):
// `NativeGl` only exists after `load`, whose contract keeps a context current.
// Object ids come from the matching Gen/Create calls made through this type.
impl GlApi for NativeGl {
    fn create_shader(&self, stage: ShaderType) -> GLuint {
        let kind = match stage {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        };
        unsafe { gl::CreateShader(kind) }
    }
    fn shader_source(&self, shader: GLuint, source: &CStr) {
        unsafe { gl::ShaderSource(shader, 1, &source.as_ptr(), null()) }
    }
    fn compile_shader(&self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) }
    }
    fn shader_compiled(&self, shader: GLuint) -> bool {
        let mut success = 0;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success) };
        success == GLint::from(gl::TRUE)
    }
    fn shader_info_log(&self, shader: GLuint) -> String {
        read_info_log(
            |len| unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, len) },
            |cap, len, buf| unsafe { gl::GetShaderInfoLog(shader, cap, len, buf) },
        )
    }
    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }
    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }
    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) }
    }
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        unsafe { gl::BindAttribLocation(program, index, name.as_ptr()) }
    }
    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) }
    }
    fn program_linked(&self, program: GLuint) -> bool {
        let mut success = 0;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut success) };
        success == GLint::from(gl::TRUE)
    }
    fn program_info_log(&self, program: GLuint) -> String {
        read_info_log(
            |len| unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, len) },
            |cap, len, buf| unsafe { gl::GetProgramInfoLog(program, cap, len, buf) },
        )
    }
    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }
    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn gen_vertex_array(&self) -> GLuint {
        let mut vao = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        vao
    }
    fn bind_vertex_array(&self, vao: GLuint) {
        unsafe { gl::BindVertexArray(vao) }
    }
    fn gen_buffer(&self) -> GLuint {
        let mut vbo = 0;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        vbo
    }
    fn bind_array_buffer(&self, vbo: GLuint) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, vbo) }
    }
    fn array_buffer_static_data(&self, data: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let size = isize::try_from(bytes.len()).unwrap_or(isize::MAX);
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                size,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            )
        }
    }
    fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }
    fn vertex_attrib_pointer_f32(&self, index: GLuint, components: GLint) {
        unsafe { gl::VertexAttribPointer(index, components, gl::FLOAT, gl::FALSE, 0, null()) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { gl::ClearColor(r, g, b, a) }
    }
    fn clear_color_and_depth(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) }
    }
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) }
    }
    fn draw_triangles(&self, first: GLint, count: GLsizei) {
        unsafe { gl::DrawArrays(gl::TRIANGLES, first, count) }
    }
}
