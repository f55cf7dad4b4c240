//! Concrete scenes and the capability they share.
//!
//! Each scene composes one [`Scheduler`](crate::pool::scheduler::Scheduler),
//! one [`Pool`](crate::pool::Pool) and one animator flavor:
//!
//! - [`deck`] – deals a finite deck of cards from one pile to another
//! - [`fire`] – emits particles forever from a fixed-size recycled pool
//! - [`composition`] – rotates a centred line of random words and images
//!
//! The host stores them as the closed [`SceneKind`] set and drives them
//! through the [`Scene`] trait.

pub mod composition;
pub mod deck;
pub mod fire;

use serde::Serialize;

use crate::components::stage::Stage;
use crate::components::tint::Tint;
use crate::components::transform::Transform2D;
use crate::pool::StageCounts;

use self::composition::CompositionScene;
use self::deck::DeckScene;
use self::fire::FireScene;

/// What the render layer should draw for an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    /// A textured sprite, by asset key.
    Sprite { key: String },
    /// A run of text.
    Text {
        content: String,
        font_size: f32,
        color: Tint,
    },
}

/// Read-only render snapshot of one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    /// Pool id of the owning entity.
    pub id: usize,
    pub stage: Stage,
    pub visual: Visual,
    pub transform: Transform2D,
}

/// What the host needs from every scene.
pub trait Scene {
    /// Display name, also used to switch scenes.
    fn name(&self) -> &str;

    /// Advance by `delta` frame units.
    ///
    /// Negative or non-finite deltas are ignored.
    fn update(&mut self, delta: f32);

    /// Recompute cached anchors for a stage of `width` x `height`.
    ///
    /// Idempotent. Non-positive or non-finite sizes are ignored.
    fn resize(&mut self, width: f32, height: f32);

    /// Snapshot of every entity and its current transform.
    fn views(&self) -> Vec<EntityView>;
}

/// The closed set of scenes the host knows how to run.
pub enum SceneKind {
    Deck(DeckScene),
    Fire(FireScene),
    Composition(CompositionScene),
}

impl Scene for SceneKind {
    fn name(&self) -> &str {
        match self {
            SceneKind::Deck(s) => s.name(),
            SceneKind::Fire(s) => s.name(),
            SceneKind::Composition(s) => s.name(),
        }
    }

    fn update(&mut self, delta: f32) {
        match self {
            SceneKind::Deck(s) => s.update(delta),
            SceneKind::Fire(s) => s.update(delta),
            SceneKind::Composition(s) => s.update(delta),
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        match self {
            SceneKind::Deck(s) => s.resize(width, height),
            SceneKind::Fire(s) => s.resize(width, height),
            SceneKind::Composition(s) => s.resize(width, height),
        }
    }

    fn views(&self) -> Vec<EntityView> {
        match self {
            SceneKind::Deck(s) => s.views(),
            SceneKind::Fire(s) => s.views(),
            SceneKind::Composition(s) => s.views(),
        }
    }
}

impl SceneKind {
    /// Stage group sizes of the scene's pool.
    pub fn counts(&self) -> StageCounts {
        match self {
            SceneKind::Deck(s) => s.pool().counts(),
            SceneKind::Fire(s) => s.pool().counts(),
            SceneKind::Composition(s) => s.pool().counts(),
        }
    }
}

impl From<DeckScene> for SceneKind {
    fn from(scene: DeckScene) -> Self {
        SceneKind::Deck(scene)
    }
}

impl From<FireScene> for SceneKind {
    fn from(scene: FireScene) -> Self {
        SceneKind::Fire(scene)
    }
}

impl From<CompositionScene> for SceneKind {
    fn from(scene: CompositionScene) -> Self {
        SceneKind::Composition(scene)
    }
}

/// A frame delta a scene can safely consume.
pub(crate) fn is_valid_delta(delta: f32) -> bool {
    delta.is_finite() && delta >= 0.0
}

/// A stage size that can be laid out without dividing by zero.
pub(crate) fn is_valid_stage(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
