//! Standalone functions and modules to wrap the nitty-gritty of
//! OpenGL objects with Rust structs.
pub mod api;
pub mod native;
pub mod program;
pub mod shader;

#[cfg(test)]
pub(crate) mod recording;

pub use api::*;
pub use native::*;
pub use program::*;
pub use shader::*;

/// Update the OpenGL viewport to cover a `width` x `height` surface.
pub fn gl_upd_viewport(gl: &impl GlApi, width: u32, height: u32) {
    let real_width = i32::try_from(width).unwrap_or(i32::MAX);
    let real_height = i32::try_from(height).unwrap_or(i32::MAX);
    gl.viewport(0, 0, real_width, real_height);
}
