//! Rotating text and image composition scene.
//!
//! Every update period a new line of three items is generated, each one
//! randomly a word or an image, at a random font size. The line is centred
//! on the stage. Two pooled groups alternate: the shown one is settled and
//! hidden while the other is recycled with the fresh line.

use fastrand::Rng;
use glam::Vec2;
use log::debug;

use super::{EntityView, Scene, Visual, is_valid_delta, is_valid_stage};
use crate::animation::Animator;
use crate::components::composition::{CompositionPayload, ITEMS_PER_COMPOSITION, ItemVisual};
use crate::components::entity::PooledEntity;
use crate::components::tint::Tint;
use crate::components::transform::Transform2D;
use crate::error::{Result, SceneError, ensure_positive};
use crate::pool::Pool;
use crate::pool::scheduler::Scheduler;

pub const COMPOSITION_SCENE_NAME: &str = "Text and Images";

/// Number of groups cycled by the scene: one shown, one waiting.
const GROUPS: usize = 2;

/// Measures a word at a font size.
///
/// Font metrics belong to the render layer; the scene only needs sizes to
/// lay items out and centre the line.
pub trait TextMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Vec2;
}

/// Every character advances by the same fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        FixedAdvance {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMetrics for FixedAdvance {
    fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(chars * font_size * self.advance, font_size * self.line_height)
    }
}

/// An image that can appear in a composition.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualSpec {
    pub key: String,
    /// Natural texture size in pixels.
    pub size: Vec2,
}

impl VisualSpec {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        VisualSpec {
            key: key.into(),
            size: Vec2::new(width, height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeRange {
    pub min: f32,
    pub max: f32,
}

/// Construction options for [`CompositionScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionConfig {
    /// Time between two rotations, in milliseconds.
    pub update_period_ms: f32,
    pub visuals: Vec<VisualSpec>,
    pub words: Vec<String>,
    pub font_size_range: FontSizeRange,
    pub color: Tint,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        CompositionConfig {
            update_period_ms: 2000.0,
            visuals: vec![
                VisualSpec::new("smile", 64.0, 64.0),
                VisualSpec::new("star", 32.0, 32.0),
                VisualSpec::new("coin", 48.0, 48.0),
            ],
            words: ["fire", "cards", "pool", "frame", "scene", "tick"]
                .into_iter()
                .map(String::from)
                .collect(),
            font_size_range: FontSizeRange {
                min: 12.0,
                max: 48.0,
            },
            color: Tint::WHITE,
        }
    }
}

impl CompositionConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("update_period_ms", self.update_period_ms)?;
        if self.visuals.is_empty() {
            return Err(SceneError::InvalidConfiguration(
                "composition needs at least one visual".into(),
            ));
        }
        if self.words.is_empty() {
            return Err(SceneError::InvalidConfiguration(
                "composition needs at least one word".into(),
            ));
        }
        for visual in &self.visuals {
            ensure_positive(&format!("{} width", visual.key), visual.size.x)?;
            ensure_positive(&format!("{} height", visual.key), visual.size.y)?;
        }
        let FontSizeRange { min, max } = self.font_size_range;
        ensure_positive("font_size_range.min", min)?;
        ensure_positive("font_size_range.max", max)?;
        if min > max {
            return Err(SceneError::InvalidConfiguration(format!(
                "font_size_range.min ({min}) exceeds max ({max})"
            )));
        }
        Ok(())
    }
}

/// Keeps the shown group active until the next rotation replaces it.
struct HeldUntilRotated;

impl Animator<CompositionPayload> for HeldUntilRotated {
    fn animate(&mut self, _group: &mut PooledEntity<CompositionPayload>, _delta: f32) {}

    fn is_complete(&self, _group: &PooledEntity<CompositionPayload>) -> bool {
        false
    }
}

pub struct CompositionScene {
    config: CompositionConfig,
    scheduler: Scheduler,
    pool: Pool<CompositionPayload>,
    metrics: Box<dyn TextMetrics + Send + Sync>,
    rng: Rng,
    stage_center: Vec2,
}

impl CompositionScene {
    pub fn new(config: CompositionConfig, frames_per_ms: f32) -> Result<Self> {
        Self::with_parts(config, frames_per_ms, Box::new(FixedAdvance::default()), Rng::new())
    }

    /// Build the scene with caller-provided metrics and random source.
    ///
    /// The first composition is generated immediately.
    pub fn with_parts(
        config: CompositionConfig,
        frames_per_ms: f32,
        metrics: Box<dyn TextMetrics + Send + Sync>,
        rng: Rng,
    ) -> Result<Self> {
        config.validate()?;
        let scheduler = Scheduler::from_millis(config.update_period_ms, frames_per_ms)?;
        let mut pool = Pool::with_settled(
            std::iter::repeat_n(CompositionPayload::default(), GROUPS),
            scheduler.period(),
        )?;
        for group in pool.iter_mut() {
            group.transform = Transform2D::hidden();
        }
        let mut scene = CompositionScene {
            config,
            scheduler,
            pool,
            metrics,
            rng,
            stage_center: Vec2::ZERO,
        };
        scene.rotate();
        Ok(scene)
    }

    pub fn pool(&self) -> &Pool<CompositionPayload> {
        &self.pool
    }

    /// The group currently on stage.
    pub fn current(&self) -> Option<&PooledEntity<CompositionPayload>> {
        let id = *self.pool.active_ids().first()?;
        self.pool.get(id)
    }

    /// Replace the shown group with a freshly generated one.
    fn rotate(&mut self) {
        let previous = self.pool.active_ids().to_vec();
        let payload = compose(&mut self.rng, &self.config, self.metrics.as_ref());
        let position = centred(self.stage_center, payload.size);
        if let Some(group) = self.pool.activate_next() {
            group.payload = payload;
            group.transform = Transform2D {
                position,
                ..Default::default()
            };
        }
        for id in previous {
            if !self.pool.settle(id) {
                continue;
            }
            if let Some(old) = self.pool.get_mut(id) {
                old.transform.visible = false;
            }
        }
    }
}

/// Generate one line of items.
fn compose(
    rng: &mut Rng,
    config: &CompositionConfig,
    metrics: &dyn TextMetrics,
) -> CompositionPayload {
    let FontSizeRange { min, max } = config.font_size_range;
    let font_size = (rng.f32() * (max - min)).floor() + min;
    let pieces: Vec<_> = (0..ITEMS_PER_COMPOSITION)
        .map(|_| {
            if 0.5 > rng.f32() {
                let visual = &config.visuals[rng.usize(..config.visuals.len())];
                let scale = font_size / visual.size.y;
                (ItemVisual::Image(visual.key.clone()), visual.size, scale)
            } else {
                let word = &config.words[rng.usize(..config.words.len())];
                let size = metrics.measure(word, font_size);
                (ItemVisual::Text(word.clone()), size, 1.0)
            }
        })
        .collect();
    CompositionPayload::layout(pieces, font_size)
}

fn centred(center: Vec2, size: Vec2) -> Vec2 {
    center - size * 0.5
}

impl Scene for CompositionScene {
    fn name(&self) -> &str {
        COMPOSITION_SCENE_NAME
    }

    fn update(&mut self, delta: f32) {
        if !is_valid_delta(delta) {
            debug!("composition: ignoring delta {delta}");
            return;
        }
        if self.scheduler.advance_once(delta) {
            self.rotate();
        }
        self.pool.advance_active(delta, &mut HeldUntilRotated);
    }

    fn resize(&mut self, width: f32, height: f32) {
        if !is_valid_stage(width, height) {
            debug!("composition: ignoring stage size {width}x{height}");
            return;
        }
        self.stage_center = Vec2::new(width / 2.0, height / 2.0);
        let center = self.stage_center;
        for group in self.pool.iter_mut() {
            group.transform.position = centred(center, group.payload.size);
        }
    }

    fn views(&self) -> Vec<EntityView> {
        let mut views = Vec::with_capacity(ITEMS_PER_COMPOSITION * GROUPS);
        for group in self.pool.iter() {
            for item in &group.payload.items {
                let visual = match &item.visual {
                    ItemVisual::Image(key) => Visual::Sprite { key: key.clone() },
                    ItemVisual::Text(content) => Visual::Text {
                        content: content.clone(),
                        font_size: group.payload.font_size,
                        color: self.config.color,
                    },
                };
                let mut transform = group.transform;
                transform.position.x += item.offset_x;
                transform.scale = item.scale;
                views.push(EntityView {
                    id: group.id(),
                    stage: group.stage(),
                    visual,
                    transform,
                });
            }
        }
        views
    }
}
