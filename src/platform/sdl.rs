use sdl2::{
    event::{Event, WindowEvent},
    video::{self, GLContext, SwapInterval},
    EventPump, Sdl, VideoSubsystem,
};

use super::{Platform, PlatformEvent, Surface, WindowContext};
use crate::{
    config::{GlProfile, WindowConfig},
    error::EngineError,
    gl_wrappers::NativeGl,
};

/// [`Platform`] backed by SDL2.
#[derive(Debug, Default)]
pub struct SdlPlatform;

/// An SDL window and the GL context created for it.
pub struct SdlWindow {
    // Field order is drop order: the context goes before the window,
    // the window before the subsystems.
    _gl_ctx: GLContext,
    window: video::Window,
    event_pump: EventPump,
    _video_ctx: VideoSubsystem,
    _sdl_ctx: Sdl,
}

impl Platform for SdlPlatform {
    type Window = SdlWindow;
    type Gl = NativeGl;

    fn initialise(&mut self, config: &WindowConfig) -> Result<(SdlWindow, NativeGl), EngineError> {
        let (sdl_ctx, video_ctx, window) = init_sdl(config)?;
        let event_pump = sdl_ctx.event_pump()?;

        let gl_ctx = window.gl_create_context()?;
        window.gl_make_current(&gl_ctx)?;

        // SAFETY:
        // `gl_ctx` was just made current on this thread, and `SdlWindow`
        // keeps it alive for as long as the returned `NativeGl` is usable.
        let gl = unsafe { NativeGl::load(|s| video_ctx.gl_get_proc_address(s).cast()) };

        let interval = if config.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video_ctx.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval (vsync: {}): {e}", config.vsync);
        }

        if config.debug_context {
            gl.enable_debug_output();
        }

        log::info!(
            "Opened {}x{} window '{}' with an OpenGL {}.{} {:?} context",
            config.width,
            config.height,
            config.title,
            config.gl_version.0,
            config.gl_version.1,
            config.gl_profile,
        );

        let window = SdlWindow {
            _gl_ctx: gl_ctx,
            window,
            event_pump,
            _video_ctx: video_ctx,
            _sdl_ctx: sdl_ctx,
        };
        Ok((window, gl))
    }
}

fn init_sdl(config: &WindowConfig) -> Result<(Sdl, VideoSubsystem, video::Window), EngineError> {
    let sdl_ctx = sdl2::init()?;

    let video_ctx = sdl_ctx.video()?;
    video_ctx.gl_load_library_default()?;

    let gl_attr = video_ctx.gl_attr();
    if config.debug_context {
        gl_attr.set_context_flags().debug().set();
    }
    let (major, minor) = config.gl_version;
    gl_attr.set_context_version(major, minor);
    gl_attr.set_context_profile(match config.gl_profile {
        GlProfile::Core => video::GLProfile::Core,
        GlProfile::Compatibility => video::GLProfile::Compatibility,
    });
    gl_attr.set_double_buffer(true);
    gl_attr.set_depth_size(24);

    let mut builder = video_ctx.window(&config.title, config.width, config.height);
    builder.position_centered().opengl();
    if config.resizable {
        builder.resizable();
    }
    let window = builder.build()?;

    Ok((sdl_ctx, video_ctx, window))
}

impl Surface for SdlWindow {
    fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }
}

impl WindowContext for SdlWindow {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        let main_id = self.window.id();
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(PlatformEvent::CloseRequested),
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Close,
                    ..
                } if window_id == main_id => Some(PlatformEvent::CloseRequested),
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } if window_id == main_id => Some(PlatformEvent::Resized {
                    width: width.try_into().unwrap_or(0),
                    height: height.try_into().unwrap_or(0),
                }),
                _ => None,
            })
            .collect()
    }
}
