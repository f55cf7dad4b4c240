//! Fire particle scene.
//!
//! A fixed pool of particles starts settled and invisible. Every emission
//! period the oldest settled particle is recycled at the emitter with a
//! scattered start velocity. Particles rise under a shared wandering
//! acceleration and fade from yellow to red over their expected lifetime,
//! which is one emission period per particle in the pool. The pool therefore
//! runs an endless emission loop without allocating.

use fastrand::Rng;
use glam::Vec2;
use log::debug;

use super::{EntityView, Scene, Visual, is_valid_delta, is_valid_stage};
use crate::animation::particle::{ParticleAnimator, random_spread};
use crate::components::particle::ParticlePayload;
use crate::components::tint::Tint;
use crate::components::transform::Transform2D;
use crate::error::{Result, SceneError, ensure_non_negative, ensure_positive};
use crate::pool::{Pool, VisitOrder};
use crate::pool::scheduler::Scheduler;

pub const FIRE_SCENE_NAME: &str = "Fire";

/// Construction options for [`FireScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct FireConfig {
    /// Asset key of the particle sprite.
    pub visual: String,
    pub count: usize,
    /// Time between two emissions, in milliseconds.
    pub emission_period_ms: f32,
    /// Constant lift, in pixels per frame squared.
    pub upward_acceleration: f32,
    /// Spread of each start velocity axis.
    pub start_velocity_scatter: f32,
    /// Spread of the per-particle acceleration random walk.
    pub turbulence: f32,
    /// Particle sprite size, used to centre the emitter.
    pub sprite_size: Vec2,
}

impl Default for FireConfig {
    fn default() -> Self {
        FireConfig {
            visual: "flame".into(),
            count: 10,
            emission_period_ms: 100.0,
            upward_acceleration: 0.05,
            start_velocity_scatter: 1.0,
            turbulence: 0.02,
            sprite_size: Vec2::new(64.0, 64.0),
        }
    }
}

impl FireConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(SceneError::InvalidConfiguration(
                "particle count must be positive".into(),
            ));
        }
        ensure_positive("emission_period_ms", self.emission_period_ms)?;
        if !self.upward_acceleration.is_finite() {
            return Err(SceneError::InvalidConfiguration(format!(
                "upward_acceleration must be finite, got {}",
                self.upward_acceleration
            )));
        }
        ensure_non_negative("start_velocity_scatter", self.start_velocity_scatter)?;
        ensure_non_negative("turbulence", self.turbulence)?;
        ensure_positive("sprite_width", self.sprite_size.x)?;
        ensure_positive("sprite_height", self.sprite_size.y)
    }
}

pub struct FireScene {
    config: FireConfig,
    scheduler: Scheduler,
    pool: Pool<ParticlePayload>,
    origin: Vec2,
    rng: Rng,
    next_z: i32,
}

impl FireScene {
    pub fn new(config: FireConfig, frames_per_ms: f32) -> Result<Self> {
        Self::with_rng(config, frames_per_ms, Rng::new())
    }

    /// Build the scene with a caller-provided random source.
    pub fn with_rng(config: FireConfig, frames_per_ms: f32, rng: Rng) -> Result<Self> {
        config.validate()?;
        let scheduler = Scheduler::from_millis(config.emission_period_ms, frames_per_ms)?;
        let lifetime = scheduler.period() * config.count as f32;
        let mut pool = Pool::with_settled(
            std::iter::repeat_n(ParticlePayload::default(), config.count),
            lifetime,
        )?;
        for particle in pool.iter_mut() {
            particle.transform = Transform2D::hidden();
        }
        Ok(FireScene {
            config,
            scheduler,
            pool,
            origin: Vec2::ZERO,
            rng,
            next_z: 0,
        })
    }

    pub fn pool(&self) -> &Pool<ParticlePayload> {
        &self.pool
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Expected lifetime of every particle, in frame units.
    pub fn expected_lifetime(&self) -> f32 {
        self.scheduler.period() * self.config.count as f32
    }

    fn emit(&mut self) {
        let scatter = self.config.start_velocity_scatter;
        let velocity = Vec2::new(
            random_spread(&mut self.rng, scatter, 0.0),
            random_spread(&mut self.rng, scatter, 0.0),
        );
        self.next_z = self.next_z.wrapping_add(1);
        let origin = self.origin;
        let z_index = self.next_z;
        if let Some(particle) = self.pool.activate_next() {
            particle.payload.reset(velocity);
            particle.transform = Transform2D {
                position: origin,
                visible: true,
                tint: Tint::YELLOW,
                z_index,
                ..Default::default()
            };
        }
    }
}

impl Scene for FireScene {
    fn name(&self) -> &str {
        FIRE_SCENE_NAME
    }

    fn update(&mut self, delta: f32) {
        if !is_valid_delta(delta) {
            debug!("fire: ignoring delta {delta}");
            return;
        }
        if self.scheduler.advance_once(delta) {
            self.emit();
        }
        let mut animator = ParticleAnimator::new(
            &mut self.rng,
            self.config.upward_acceleration,
            self.config.turbulence,
            self.origin,
        );
        self.pool.advance_active_in(delta, VisitOrder::NewestFirst, &mut animator);
    }

    fn resize(&mut self, width: f32, height: f32) {
        if !is_valid_stage(width, height) {
            debug!("fire: ignoring stage size {width}x{height}");
            return;
        }
        let sprite = self.config.sprite_size;
        self.origin = Vec2::new(width / 2.0 - sprite.x / 2.0, height / 2.0 - sprite.y / 2.0);
        let origin = self.origin;
        for particle in self.pool.iter_mut() {
            particle.transform.position = origin + particle.payload.position;
        }
    }

    fn views(&self) -> Vec<EntityView> {
        self.pool
            .iter()
            .map(|particle| EntityView {
                id: particle.id(),
                stage: particle.stage(),
                visual: Visual::Sprite {
                    key: self.config.visual.clone(),
                },
                transform: particle.transform,
            })
            .collect()
    }
}
