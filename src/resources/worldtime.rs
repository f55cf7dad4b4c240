//! Frame clock resource.
//!
//! Time is measured in frame units: one unit is one ideal frame at the
//! target frame rate, so a delta of `1.0` means "exactly one frame passed".
//! Millisecond durations are converted with [`WorldTime::frames_per_ms`].

use bevy_ecs::prelude::Resource;

/// Ideal frames per millisecond at 60 frames per second.
pub const DEFAULT_FRAMES_PER_MS: f32 = 0.06;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total scaled frame units since start.
    pub elapsed: f32,
    /// Scaled frame units of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    /// Conversion factor from milliseconds to frame units.
    pub frames_per_ms: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            frames_per_ms: DEFAULT_FRAMES_PER_MS,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Clock for a given target frame rate.
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.frames_per_ms = target_fps as f32 / 1000.0;
        self
    }

    pub fn ms_to_frames(&self, ms: f32) -> f32 {
        ms * self.frames_per_ms
    }

    /// Target frames per second implied by `frames_per_ms`.
    pub fn target_fps(&self) -> f32 {
        self.frames_per_ms * 1000.0
    }
}
