//! Per-frame animation of the globe backdrop and frame pacing.
//!
//! Nothing here affects the photo cursor; it only has to stay cheap enough
//! that gesture processing is never starved.

use crate::constants::{
    BAND_SPIN_PER_FRAME, GLOBE_SPIN_PER_FRAME, SHELL_SPIN_PER_FRAME, STARFIELD_SPIN_PER_FRAME, WORLD_BOB_AMPLITUDE,
    WORLD_BOB_FREQUENCY,
};
use std::time::{Duration, Instant};

/// Rotation and offset state of the decorative scene elements
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneAnimation {
    /// Particle globe yaw (radians)
    pub globe_yaw: f64,
    /// Wireframe shell yaw (radians)
    pub shell_yaw: f64,
    /// Timeline band roll (radians)
    pub band_roll: f64,
    /// Starfield yaw (radians)
    pub starfield_yaw: f64,
    /// Vertical offset of the world group
    pub world_offset_y: f64,
}

impl SceneAnimation {
    /// Advance one display frame at wall time `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        self.globe_yaw += GLOBE_SPIN_PER_FRAME;
        self.shell_yaw += SHELL_SPIN_PER_FRAME;
        self.band_roll += BAND_SPIN_PER_FRAME;
        self.starfield_yaw += STARFIELD_SPIN_PER_FRAME;
        self.world_offset_y = (elapsed.as_secs_f64() * WORLD_BOB_FREQUENCY).sin() * WORLD_BOB_AMPLITUDE;
    }
}

/// Paces the loop to a target framerate and measures the achieved rate
#[derive(Debug)]
pub struct FramePacer {
    frame_budget: Duration,
    frame_count: u64,
    start_time: Instant,
    last_fps_update: Instant,
    fps: f64,
}

impl FramePacer {
    /// Create a pacer for `target_fps` (treated as 1 when zero)
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_budget: Duration::from_secs(1) / target_fps.max(1),
            frame_count: 0,
            start_time: now,
            last_fps_update: now,
            fps: 0.0,
        }
    }

    /// Time allotted to one frame
    #[must_use]
    pub const fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time since the pacer was created
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Record a finished frame that started at `frame_start`, returning how
    /// long to sleep before the next one
    #[allow(clippy::cast_precision_loss)] // Frame counts stay far below 2^52
    pub fn finish_frame(&mut self, frame_start: Instant) -> Duration {
        self.frame_count += 1;
        if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
            self.fps = self.frame_count as f64 / self.start_time.elapsed().as_secs_f64();
            self.last_fps_update = Instant::now();
        }
        self.frame_budget.saturating_sub(frame_start.elapsed())
    }

    /// Frames finished so far
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average framerate, refreshed once per second
    #[must_use]
    pub const fn fps(&self) -> f64 {
        self.fps
    }
}
