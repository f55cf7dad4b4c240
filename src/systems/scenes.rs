//! Scene update system.
//!
//! Advances the active scene of the [`SceneHost`] by the current frame delta.
//! Inactive scenes are left untouched and resume where they stopped.
use bevy_ecs::prelude::*;

use crate::resources::scenehost::SceneHost;
use crate::resources::worldtime::WorldTime;

pub fn update_active_scene(time: Res<WorldTime>, mut host: ResMut<SceneHost>) {
    host.update_active(time.delta);
}
