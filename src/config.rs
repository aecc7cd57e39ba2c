//! Startup configuration for the engine.
//!
//! Everything has a [`Default`] matching the built-in pink triangle demo,
//! so `EngineConfig::default()` is all `main` needs.

use std::ffi::CString;

use gl::types::GLuint;

use crate::error::EngineError;

pub const START_WIDTH: u32 = 800;
pub const START_HEIGHT: u32 = 600;

const OPENGL_MAJOR_VER: u8 = 3;
const OPENGL_MINOR_VER: u8 = 3;

pub const DEFAULT_VERTEX_SHADER: &str = "#version 330\n\
                                         in vec3 in_pos;\n\
                                         void main() { gl_Position = vec4(in_pos, 1.0); }";

/// Pink. Writes `gl_FragColor`, so it needs a compatibility profile on strict drivers.
pub const DEFAULT_FRAGMENT_SHADER: &str = "#version 330\n\
                                           void main() { gl_FragColor = vec4(0.8, 0.2, 1.0, 1.0); }\n";

/// Three xyz positions, in clip space.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.8, -0.8, 1.0,
     0.0,  0.8, 1.0,
     0.8, -0.8, 1.0,
];

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.2, 0.8, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlProfile {
    Core,
    Compatibility,
}

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Requested context version, (major, minor).
    pub gl_version: (u8, u8),
    pub gl_profile: GlProfile,
    /// Request a debug context and log driver messages.
    pub debug_context: bool,
    pub vsync: bool,
    /// Soft frame cap; the loop sleeps off whatever is left of each frame.
    pub fps_cap: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Game".to_owned(),
            width: START_WIDTH,
            height: START_HEIGHT,
            resizable: true,
            gl_version: (OPENGL_MAJOR_VER, OPENGL_MINOR_VER),
            gl_profile: GlProfile::Compatibility,
            debug_context: false,
            vsync: false,
            fps_cap: None,
        }
    }
}

/// Binds a named vertex shader input to a fixed attribute slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeBinding {
    pub index: GLuint,
    pub name: String,
}

impl AttributeBinding {
    pub fn new(index: GLuint, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShaderConfig {
    pub vertex_source: String,
    pub fragment_source: String,
    pub attribute_bindings: Vec<AttributeBinding>,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex_source: DEFAULT_VERTEX_SHADER.to_owned(),
            fragment_source: DEFAULT_FRAGMENT_SHADER.to_owned(),
            attribute_bindings: vec![AttributeBinding::new(0, "in_pos")],
        }
    }
}

impl ShaderConfig {
    /// Check that every string can be handed to OpenGL.
    ///
    /// # Errors
    /// Errors if a source or an attribute name contains a nul byte.
    pub fn validate(&self) -> Result<(), EngineError> {
        let names = self.attribute_bindings.iter().map(|b| b.name.as_str());
        for text in [self.vertex_source.as_str(), self.fragment_source.as_str()]
            .into_iter()
            .chain(names)
        {
            CString::new(text)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub shaders: ShaderConfig,
    /// Flat xyz positions uploaded once at startup.
    pub vertices: Vec<f32>,
    pub clear_color: [f32; 4],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            shaders: ShaderConfig::default(),
            vertices: TRIANGLE_VERTICES.to_vec(),
            clear_color: CLEAR_COLOR,
        }
    }
}
