//! Frame rate estimation system.
use bevy_ecs::prelude::*;

use crate::resources::framestats::FrameStats;
use crate::resources::worldtime::WorldTime;

/// Fold the current frame delta into [`FrameStats`].
pub fn update_frame_stats(time: Res<WorldTime>, mut stats: ResMut<FrameStats>) {
    stats.record(time.delta, time.target_fps());
}
