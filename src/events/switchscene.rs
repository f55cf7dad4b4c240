//! Event and observer to change the active scene.
//!
//! Scenes are addressed by their display name. Unknown names are logged and
//! ignored; the current scene stays active.
use crate::resources::scenehost::SceneHost;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Request to make the named scene active.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SwitchSceneEvent {
    pub name: String,
}

impl SwitchSceneEvent {
    pub fn new(name: impl Into<String>) -> Self {
        SwitchSceneEvent { name: name.into() }
    }
}

/// Observer that applies a [`SwitchSceneEvent`] to the [`SceneHost`].
pub fn switch_scene_observer(trigger: On<SwitchSceneEvent>, mut host: ResMut<SceneHost>) {
    let name = &trigger.event().name;
    debug!("SwitchSceneEvent triggered: {}", name);

    if !host.switch_to(name) {
        warn!(
            "Unknown scene '{}', keeping {:?}",
            name,
            host.active_name()
        );
    }
}
