//! Exports [`EngineError`].
use crate::gl_wrappers::ShaderType;

/// Everything that can go wrong while bringing up or driving the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// SDL reports its errors as plain strings.
    #[error("platform error: {0}")]
    Platform(String),
    #[error("failed to create window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderType, log: String },
    #[error("failed to link program: {log}")]
    ProgramLink { log: String },
    #[error("vertex data must hold whole xyz triples, got {len} floats")]
    InvalidVertexData { len: usize },
    #[error("string passed to OpenGL contains an interior nul: {0}")]
    InteriorNul(#[from] std::ffi::NulError),
    #[error("engine has not been initialised")]
    NotInitialised,
}

impl From<String> for EngineError {
    fn from(value: String) -> Self {
        EngineError::Platform(value)
    }
}
