//! The blocking frame loop and the callbacks it drives.
use std::{thread, time::Instant};

use crate::{
    platform::{PlatformEvent, Surface, WindowContext},
    time::{frame_budget, remaining_budget, FrameClock, FrameStats},
};

/// Lifecycle callbacks, invoked by [`run_frame_loop`].
pub trait WindowHandler {
    /// Called once, before the first frame.
    fn on_load(&mut self);
    /// Called once, after the window was asked to close.
    fn on_unload(&mut self);
    /// Called every frame before rendering, with the seconds since the last frame.
    fn on_update_frame(&mut self, delta: f32);
    /// Called every frame. Responsible for presenting to `surface`.
    fn on_render_frame(&mut self, delta: f32, surface: &mut dyn Surface);
}

/// Run frames until `window` reports a close request.
///
/// Returns the number of frames rendered.
pub fn run_frame_loop<W, H>(window: &mut W, handler: &mut H, fps_cap: Option<u32>) -> u64
where
    W: WindowContext,
    H: WindowHandler,
{
    handler.on_load();

    let budget = fps_cap.map(frame_budget);
    let mut clock = FrameClock::new();
    let mut stats = FrameStats::new();
    let mut frame_count: u64 = 0;

    'running: loop {
        let frame_start = Instant::now();
        for event in window.poll_events() {
            match event {
                PlatformEvent::CloseRequested => break 'running,
                PlatformEvent::Resized { width, height } => {
                    log::debug!("window resized to {width}x{height}")
                }
            }
        }

        let frame = clock.tick();
        handler.on_update_frame(frame.dt);
        handler.on_render_frame(frame.dt, &mut *window);
        frame_count += 1;

        // Soft cap fps
        if let Some(budget) = budget {
            thread::sleep(remaining_budget(budget, frame_start, Instant::now()));
        }

        if let Some(report) = stats.record(frame_start.elapsed(), Instant::now()) {
            log::debug!(
                "frametime: {:0.8}, FPS: {:0.8}, frames counted: {:05}",
                report.avg_frametime,
                report.fps,
                report.frames
            );
        }
    }

    log::info!("Window closed after {frame_count} frames");
    handler.on_unload();
    frame_count
}
