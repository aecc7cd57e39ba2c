//! Frame timing: per-frame delta, the soft fps cap and the frametime report.
use std::time::{Duration, Instant};

/// Longest delta handed to the hooks, so a stall (debugger, window drag)
/// shows up as one slow frame instead of a huge jump.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Advances the clock and returns the time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.tick_at(now)
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).min(MAX_FRAME_DELTA);
        self.last = now;
        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// How long a frame may take under a soft cap of `fps_cap` frames per second.
pub fn frame_budget(fps_cap: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps_cap.max(1)))
}

/// Time left to sleep so that a frame which started at `frame_start`
/// lasts at least `budget`.
pub fn remaining_budget(budget: Duration, frame_start: Instant, now: Instant) -> Duration {
    budget
        .checked_sub(now.saturating_duration_since(frame_start))
        .unwrap_or(Duration::ZERO)
}

/// Collects frametimes and reports their average about once a second.
#[derive(Debug)]
pub struct FrameStats {
    frametimes: Vec<f64>,
    last_report: Instant,
}

/// Average over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub avg_frametime: f64,
    pub fps: f64,
    pub frames: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frametimes: Vec::new(),
            last_report: Instant::now(),
        }
    }

    /// Record one frame. Returns a report when a second or more has
    /// passed since the last one.
    pub fn record(&mut self, frametime: Duration, now: Instant) -> Option<FrameReport> {
        self.frametimes.push(frametime.as_secs_f64());
        if now.saturating_duration_since(self.last_report).as_secs() < 1 {
            return None;
        }

        // can't reduce since we're keeping this Vec around
        let total_time = self.frametimes.iter().fold(0., |acc, item| acc + *item);
        let frames = self.frametimes.len();
        let avg_frametime = total_time / frames as f64;
        self.frametimes.clear();
        self.last_report = now;

        Some(FrameReport {
            avg_frametime,
            fps: if avg_frametime > 0. { 1. / avg_frametime } else { 0. },
            frames,
        })
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_time_and_counts_frames() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last: start,
            frame_index: 0,
        };
        let first = clock.tick_at(start + Duration::from_millis(16));
        let second = clock.tick_at(start + Duration::from_millis(48));
        assert!((first.dt - 0.016).abs() < 1e-6);
        assert!((second.dt - 0.032).abs() < 1e-6);
        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
    }

    #[test]
    fn tick_clamps_long_stalls() {
        let start = Instant::now();
        let mut clock = FrameClock {
            last: start,
            frame_index: 0,
        };
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn budget_for_sixty_fps() {
        assert_eq!(frame_budget(60), Duration::from_micros(16_666));
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn remaining_budget_never_negative() {
        let start = Instant::now();
        let budget = Duration::from_millis(10);
        assert_eq!(
            remaining_budget(budget, start, start + Duration::from_millis(4)),
            Duration::from_millis(6)
        );
        assert_eq!(
            remaining_budget(budget, start, start + Duration::from_millis(40)),
            Duration::ZERO
        );
    }

    #[test]
    fn stats_report_once_per_second() {
        let mut stats = FrameStats::new();
        let start = stats.last_report;
        assert!(stats
            .record(Duration::from_millis(10), start + Duration::from_millis(500))
            .is_none());
        let report = stats
            .record(Duration::from_millis(30), start + Duration::from_secs(1))
            .unwrap();
        assert_eq!(report.frames, 2);
        assert!((report.avg_frametime - 0.02).abs() < 1e-9);
        assert!((report.fps - 50.).abs() < 1e-6);
        assert!(stats
            .record(Duration::from_millis(10), start + Duration::from_millis(1500))
            .is_none());
    }
}
