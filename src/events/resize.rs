//! Stage resize event and observer.
//!
//! Emitting a [`ResizeEvent`] stores the new size in [`ScreenSize`] and
//! propagates it to every registered scene, active or not.
use crate::resources::scenehost::SceneHost;
use crate::resources::screensize::ScreenSize;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// New stage size in pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub width: f32,
    pub height: f32,
}

/// Observer that applies a [`ResizeEvent`].
///
/// Degenerate sizes still reach the scenes, which keep their previous
/// anchors for them.
pub fn resize_observer(
    trigger: On<ResizeEvent>,
    mut screen: ResMut<ScreenSize>,
    host: Option<ResMut<SceneHost>>,
) {
    let event = trigger.event();
    debug!("ResizeEvent triggered: {}x{}", event.width, event.height);

    screen.w = event.width;
    screen.h = event.height;

    match host {
        Some(mut host) => host.resize_all(event.width, event.height),
        None => warn!("ResizeEvent without a SceneHost resource"),
    }
}
