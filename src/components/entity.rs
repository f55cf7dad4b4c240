//! Poolable animated unit.
//!
//! A [`PooledEntity`] is owned by a [`Pool`](crate::pool::Pool) for the whole
//! life of its scene. It is never destroyed, only moved between stages.

use super::stage::Stage;
use super::transform::Transform2D;

/// One pooled entity, generic over its payload.
///
/// `progress` is clamped to `target_duration`; the entity is complete when
/// the two are equal.
#[derive(Debug, Clone)]
pub struct PooledEntity<P> {
    id: usize,
    stage: Stage,
    progress: f32,
    target_duration: f32,
    /// Kind-specific motion data.
    pub payload: P,
    /// Render state, rewritten by the scene's animator.
    pub transform: Transform2D,
}

impl<P> PooledEntity<P> {
    pub(crate) fn new(id: usize, stage: Stage, target_duration: f32, payload: P) -> Self {
        PooledEntity {
            id,
            stage,
            progress: 0.0,
            target_duration,
            payload,
            transform: Transform2D::default(),
        }
    }

    /// Stable index into the pool's storage.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target_duration(&self) -> f32 {
        self.target_duration
    }

    /// Normalized completion in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        (self.progress / self.target_duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.target_duration
    }

    pub(crate) fn activate(&mut self) {
        self.stage = Stage::Active;
        self.progress = 0.0;
    }

    pub(crate) fn settle(&mut self) {
        self.stage = Stage::Settled;
    }

    /// Accumulate `delta`, clamped to the target duration.
    pub(crate) fn advance(&mut self, delta: f32) {
        self.progress = (self.progress + delta).min(self.target_duration);
    }
}
