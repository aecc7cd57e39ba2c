//! The windowing side of the engine: opening a window with a GL context,
//! pumping its events and presenting frames.
mod sdl;

pub use sdl::{SdlPlatform, SdlWindow};

use crate::{config::WindowConfig, error::EngineError, gl_wrappers::GlApi};

/// Lifecycle events the frame loop cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The user or the OS asked the window to close.
    CloseRequested,
    Resized { width: u32, height: u32 },
}

/// Something frames can be presented to.
pub trait Surface {
    /// Current framebuffer size in pixels.
    fn drawable_size(&self) -> (u32, u32);
    fn swap_buffers(&mut self);
}

/// An open window with a current GL context.
pub trait WindowContext: Surface {
    /// Drain pending events without blocking.
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
}

/// Brings up the windowing library, a window and its GL bindings.
pub trait Platform {
    type Window: WindowContext;
    type Gl: GlApi;

    /// # Errors
    /// Errors if the library, the window or the GL context cannot be created.
    fn initialise(
        &mut self,
        config: &WindowConfig,
    ) -> Result<(Self::Window, Self::Gl), EngineError>;
}
