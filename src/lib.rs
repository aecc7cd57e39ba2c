//! A small OpenGL demo engine: one window, one shader program, one triangle.
//!
//! [`GameEngine`] opens the window through SDL2, compiles the configured
//! shaders, uploads the configured vertices and redraws them every frame
//! until the window is closed. [`maths`] holds a few scalar helpers.

pub mod config;
pub mod engine;
pub mod error;
pub mod game_loop;
pub mod gl_wrappers;
pub mod logging;
pub mod maths;
pub mod platform;
pub mod scene;
pub mod time;
pub mod vertex;

pub use config::EngineConfig;
pub use engine::{EngineState, GameEngine};
pub use error::EngineError;
