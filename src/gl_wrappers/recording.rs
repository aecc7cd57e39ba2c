//! A [`GlApi`] that records calls instead of talking to a driver.
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    ffi::CStr,
};

use gl::types::{GLint, GLsizei, GLuint};

use super::{GlApi, ShaderType};

#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderType, GLuint),
    ShaderSource(GLuint, String),
    CompileShader(GLuint),
    DeleteShader(GLuint),
    CreateProgram(GLuint),
    AttachShader(GLuint, GLuint),
    DetachShader(GLuint, GLuint),
    BindAttribLocation(GLuint, GLuint, String),
    LinkProgram(GLuint),
    UseProgram(GLuint),
    DeleteProgram(GLuint),
    GenVertexArray(GLuint),
    BindVertexArray(GLuint),
    GenBuffer(GLuint),
    BindArrayBuffer(GLuint),
    ArrayBufferStaticData(Vec<f32>),
    EnableVertexAttribArray(GLuint),
    VertexAttribPointerF32(GLuint, GLint),
    ClearColor([f32; 4]),
    ClearColorAndDepth,
    Viewport(GLint, GLint, GLsizei, GLsizei),
    DrawTriangles(GLint, GLsizei),
}

/// Hands out fresh ids and treats any shader source that does not start
/// with `#version` as a compile error.
#[derive(Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    sources: RefCell<HashMap<GLuint, String>>,
    next_id: Cell<GLuint>,
    fail_link: bool,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every link reports failure.
    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn fresh_id(&self) -> GLuint {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GlApi for RecordingGl {
    fn create_shader(&self, stage: ShaderType) -> GLuint {
        let id = self.fresh_id();
        self.record(GlCall::CreateShader(stage, id));
        id
    }
    fn shader_source(&self, shader: GLuint, source: &CStr) {
        let source = source.to_string_lossy().into_owned();
        self.sources.borrow_mut().insert(shader, source.clone());
        self.record(GlCall::ShaderSource(shader, source));
    }
    fn compile_shader(&self, shader: GLuint) {
        self.record(GlCall::CompileShader(shader));
    }
    fn shader_compiled(&self, shader: GLuint) -> bool {
        self.sources
            .borrow()
            .get(&shader)
            .is_some_and(|s| s.starts_with("#version"))
    }
    fn shader_info_log(&self, shader: GLuint) -> String {
        format!("0:1({shader}): error: syntax error, unexpected token")
    }
    fn delete_shader(&self, shader: GLuint) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> GLuint {
        let id = self.fresh_id();
        self.record(GlCall::CreateProgram(id));
        id
    }
    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(GlCall::AttachShader(program, shader));
    }
    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(GlCall::DetachShader(program, shader));
    }
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        let name = name.to_string_lossy().into_owned();
        self.record(GlCall::BindAttribLocation(program, index, name));
    }
    fn link_program(&self, program: GLuint) {
        self.record(GlCall::LinkProgram(program));
    }
    fn program_linked(&self, _program: GLuint) -> bool {
        !self.fail_link
    }
    fn program_info_log(&self, _program: GLuint) -> String {
        "error: linking with uncompiled/unspecialized shader".to_owned()
    }
    fn use_program(&self, program: GLuint) {
        self.record(GlCall::UseProgram(program));
    }
    fn delete_program(&self, program: GLuint) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn gen_vertex_array(&self) -> GLuint {
        let id = self.fresh_id();
        self.record(GlCall::GenVertexArray(id));
        id
    }
    fn bind_vertex_array(&self, vao: GLuint) {
        self.record(GlCall::BindVertexArray(vao));
    }
    fn gen_buffer(&self) -> GLuint {
        let id = self.fresh_id();
        self.record(GlCall::GenBuffer(id));
        id
    }
    fn bind_array_buffer(&self, vbo: GLuint) {
        self.record(GlCall::BindArrayBuffer(vbo));
    }
    fn array_buffer_static_data(&self, data: &[f32]) {
        self.record(GlCall::ArrayBufferStaticData(data.to_vec()));
    }
    fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }
    fn vertex_attrib_pointer_f32(&self, index: GLuint, components: GLint) {
        self.record(GlCall::VertexAttribPointerF32(index, components));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }
    fn clear_color_and_depth(&self) {
        self.record(GlCall::ClearColorAndDepth);
    }
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(GlCall::Viewport(x, y, width, height));
    }
    fn draw_triangles(&self, first: GLint, count: GLsizei) {
        self.record(GlCall::DrawTriangles(first, count));
    }
}
