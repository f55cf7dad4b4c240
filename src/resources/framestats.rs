//! Frames-per-second estimate.
//!
//! Derived from the frame delta: a delta of one frame unit is exactly the
//! target frame rate, two units is half of it, and so on.

use bevy_ecs::prelude::Resource;

/// Weight of the newest sample in the moving average.
const SMOOTHING: f32 = 0.1;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Smoothed frames per second; zero until the first sample.
    pub fps: f32,
    pub samples: u64,
}

impl FrameStats {
    /// Fold in one frame of `delta` frame units at `target_fps`.
    ///
    /// Zero or invalid deltas carry no rate information and are skipped.
    pub fn record(&mut self, delta: f32, target_fps: f32) {
        if !(delta.is_finite() && delta > 0.0) {
            return;
        }
        let instant = target_fps / delta;
        self.fps = if self.samples == 0 {
            instant
        } else {
            self.fps + (instant - self.fps) * SMOOTHING
        };
        self.samples += 1;
    }
}
