//! Scene registry and active scene selection.
//!
//! Scenes are added once at startup and live as long as the host. The first
//! scene added becomes active. Only the active scene is updated, but every
//! scene is resized, so switching never shows a stale layout. Switching
//! does not reset anything: a scene resumes exactly where it stopped.

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;

use crate::resources::screensize::ScreenSize;
use crate::scenes::{Scene, SceneKind};

#[derive(Resource, Default)]
pub struct SceneHost {
    scenes: Vec<SceneKind>,
    by_name: FxHashMap<String, usize>,
    active: Option<usize>,
}

impl SceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene and size it to the current stage.
    ///
    /// A scene with an already registered name replaces the lookup entry;
    /// both stay in the list.
    pub fn add_scene(&mut self, scene: impl Into<SceneKind>, stage: ScreenSize) {
        let mut scene = scene.into();
        scene.resize(stage.w, stage.h);
        let index = self.scenes.len();
        self.by_name.insert(scene.name().to_string(), index);
        if self.active.is_none() {
            info!("Active scene: {}", scene.name());
            self.active = Some(index);
        }
        self.scenes.push(scene);
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.name())
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SceneKind> {
        let index = *self.by_name.get(name.as_ref())?;
        self.scenes.get(index)
    }

    pub fn active(&self) -> Option<&SceneKind> {
        self.scenes.get(self.active?)
    }

    pub fn active_mut(&mut self) -> Option<&mut SceneKind> {
        self.scenes.get_mut(self.active?)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active().map(|s| s.name())
    }

    /// Make the named scene active. Returns `false` for unknown names.
    pub fn switch_to(&mut self, name: impl AsRef<str>) -> bool {
        let Some(&index) = self.by_name.get(name.as_ref()) else {
            return false;
        };
        if self.active != Some(index) {
            info!("Switching to scene: {}", name.as_ref());
            self.active = Some(index);
        }
        true
    }

    /// Advance the active scene only.
    pub fn update_active(&mut self, delta: f32) {
        if let Some(scene) = self.active_mut() {
            scene.update(delta);
        }
    }

    /// Propagate a stage size to every scene.
    pub fn resize_all(&mut self, width: f32, height: f32) {
        for scene in &mut self.scenes {
            scene.resize(width, height);
        }
    }
}
