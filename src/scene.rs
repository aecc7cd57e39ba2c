//! The one thing this engine draws: a static triangle.
use gl::types::GLuint;

use crate::{
    config::{EngineConfig, ShaderConfig},
    error::EngineError,
    gl_wrappers::{gl_upd_viewport, GlApi, Program, ProgramArgs, Shader},
    vertex::{VertexData, COMPONENTS},
};

/// GPU state for the triangle, plus the frame timing it was last given.
pub struct TriangleScene {
    vao: GLuint,
    vbo: GLuint,
    program: Option<Program>,
    vertices: VertexData,
    clear_color: [f32; 4],
    last_delta: f32,
    elapsed: f32,
}

impl TriangleScene {
    /// Upload the vertices and build the shader program.
    ///
    /// Shader compile and link failures are logged, not returned: the scene
    /// keeps whatever program the driver produced and draws with it anyway.
    ///
    /// # Errors
    /// Errors only if the shader sources or attribute names contain a nul
    /// byte. Nothing is created on the GL side in that case.
    pub fn load(
        gl: &impl GlApi,
        vertices: VertexData,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        config.shaders.validate()?;

        let vao = gl.gen_vertex_array();
        gl.bind_vertex_array(vao);
        let vbo = gl.gen_buffer();
        gl.bind_array_buffer(vbo);
        gl.array_buffer_static_data(vertices.as_slice());

        // position attrib
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, COMPONENTS as i32);

        let program = build_program(gl, &config.shaders)?;

        Ok(Self {
            vao,
            vbo,
            program: Some(program),
            vertices,
            clear_color: config.clear_color,
            last_delta: 0.,
            elapsed: 0.,
        })
    }

    pub fn update(&mut self, delta: f32) {
        self.last_delta = delta;
        self.elapsed += delta;
    }

    /// Clear, then draw every uploaded vertex as a triangle list into a
    /// `width` x `height` viewport. Presenting is up to the caller.
    pub fn render(&self, gl: &impl GlApi, width: u32, height: u32) {
        let [r, g, b, a] = self.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear_color_and_depth();

        gl_upd_viewport(gl, width, height);

        let Some(program) = &self.program else {
            return;
        };
        program.bind(gl);
        gl.bind_vertex_array(self.vao);
        gl.draw_triangles(0, self.vertices.gl_len());
    }

    /// Delete the program. Safe to call more than once.
    ///
    /// The vertex array and buffer are left to die with the context.
    pub fn unload(&mut self, gl: &impl GlApi) {
        if let Some(program) = self.program.take() {
            program.delete(gl);
        }
    }

    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
    /// Seconds of frame time accumulated through [`TriangleScene::update`].
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
    pub fn vao(&self) -> GLuint {
        self.vao
    }
    pub fn vbo(&self) -> GLuint {
        self.vbo
    }
}

fn build_program(gl: &impl GlApi, shaders: &ShaderConfig) -> Result<Program, EngineError> {
    let program = Program::new(gl);

    let vert_shader = Shader::vertex(gl, shaders.vertex_source.as_str())?;
    if let Err(e) = vert_shader.compile(gl) {
        log::error!("{e}");
    }
    let frag_shader = Shader::fragment(gl, shaders.fragment_source.as_str())?;
    if let Err(e) = frag_shader.compile(gl) {
        log::error!("{e}");
    }

    let linked = program.link(
        gl,
        ProgramArgs {
            vert_shader: &vert_shader,
            frag_shader: &frag_shader,
            attribute_bindings: &shaders.attribute_bindings,
        },
    );
    match linked {
        Ok(()) => log::debug!("linked shader program {}", program.id()),
        Err(e) => log::error!("{e}"),
    }

    vert_shader.delete(gl);
    frag_shader.delete(gl);
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::TRIANGLE_VERTICES,
        gl_wrappers::recording::{GlCall, RecordingGl},
        logging::capture,
    };

    fn triangle() -> VertexData {
        VertexData::new(TRIANGLE_VERTICES.to_vec()).unwrap()
    }

    #[test]
    fn load_uploads_vertices_and_links_in_pos() {
        let gl = RecordingGl::new();
        let scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        let calls = gl.calls();

        assert!(calls.contains(&GlCall::ArrayBufferStaticData(TRIANGLE_VERTICES.to_vec())));
        assert!(calls.contains(&GlCall::VertexAttribPointerF32(0, 3)));
        assert!(calls.contains(&GlCall::EnableVertexAttribArray(0)));
        assert!(calls
            .iter()
            .any(|c| matches!(c, GlCall::BindAttribLocation(_, 0, name) if name == "in_pos")));
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteShader(_))), 2);
        assert_ne!(scene.vao(), scene.vbo());
    }

    #[test]
    fn render_draws_three_vertices_after_clearing() {
        let gl = RecordingGl::new();
        let scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        let before = gl.calls().len();
        scene.render(&gl, 640, 480);
        let frame = gl.calls().split_off(before);

        assert_eq!(frame[0], GlCall::ClearColor([0.2, 0.2, 0.8, 1.0]));
        assert_eq!(frame[1], GlCall::ClearColorAndDepth);
        assert_eq!(frame[2], GlCall::Viewport(0, 0, 640, 480));
        assert_eq!(frame.last(), Some(&GlCall::DrawTriangles(0, 3)));
    }

    #[test]
    fn broken_shader_still_draws() {
        let gl = RecordingGl::new();
        let mut config = EngineConfig::default();
        config.shaders.vertex_source = "in vec3 in_pos; garbage".to_owned();

        let scene = TriangleScene::load(&gl, triangle(), &config).unwrap();
        assert!(gl.calls().iter().any(|c| matches!(c, GlCall::LinkProgram(_))));

        scene.render(&gl, 800, 600);
        assert_eq!(gl.calls().last(), Some(&GlCall::DrawTriangles(0, 3)));
    }

    #[test]
    fn nul_in_fragment_source_creates_no_gl_objects() {
        let gl = RecordingGl::new();
        let mut config = EngineConfig::default();
        config.shaders.fragment_source = "#version 330\0x".to_owned();

        let result = TriangleScene::load(&gl, triangle(), &config);
        assert!(matches!(result, Err(EngineError::InteriorNul(_))));
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn every_created_shader_is_deleted() {
        let gl = RecordingGl::new();
        let mut scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        scene.unload(&gl);

        let created = gl.count(|c| matches!(c, GlCall::CreateShader(..)));
        let deleted = gl.count(|c| matches!(c, GlCall::DeleteShader(_)));
        assert_eq!(created, 2);
        assert_eq!(created, deleted);
        assert_eq!(
            gl.count(|c| matches!(c, GlCall::CreateProgram(_))),
            gl.count(|c| matches!(c, GlCall::DeleteProgram(_)))
        );
    }

    #[test]
    fn compile_failure_is_logged_with_info_log() {
        capture::install();
        let gl = RecordingGl::new();
        let mut config = EngineConfig::default();
        config.shaders.vertex_source = "in vec3 in_pos; garbage".to_owned();
        TriangleScene::load(&gl, triangle(), &config).unwrap();

        let prefix = "failed to compile vertex shader: ";
        let line = capture::find(log::Level::Error, prefix).unwrap();
        assert!(line.len() > prefix.len());
        assert!(line.contains("syntax error"));
    }

    #[test]
    fn link_failure_is_logged_with_info_log() {
        capture::install();
        let gl = RecordingGl::new().failing_link();
        TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();

        let prefix = "failed to link program: ";
        let line = capture::find(log::Level::Error, prefix).unwrap();
        assert!(line.len() > prefix.len());
        assert!(line.contains("uncompiled/unspecialized"));
    }

    #[test]
    fn failed_link_still_draws() {
        let gl = RecordingGl::new().failing_link();
        let scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        scene.render(&gl, 800, 600);
        assert_eq!(gl.calls().last(), Some(&GlCall::DrawTriangles(0, 3)));
    }

    #[test]
    fn unload_deletes_only_the_program_once() {
        let gl = RecordingGl::new();
        let mut scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        scene.unload(&gl);
        scene.unload(&gl);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteProgram(_))), 1);
    }

    #[test]
    fn update_tracks_delta_and_elapsed() {
        let gl = RecordingGl::new();
        let mut scene = TriangleScene::load(&gl, triangle(), &EngineConfig::default()).unwrap();
        scene.update(0.5);
        scene.update(0.25);
        assert_eq!(scene.last_delta(), 0.25);
        assert_eq!(scene.elapsed(), 0.75);
    }
}
