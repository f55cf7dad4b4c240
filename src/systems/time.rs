//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta frame units on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in frame units. Negative or non-finite
/// deltas are recorded as zero so scenes never run backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        debug!("Ignoring frame delta {}", dt);
        0.0
    };
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
