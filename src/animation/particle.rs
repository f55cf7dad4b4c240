//! Fire particle motion.
//!
//! Every frame starts from a base acceleration of
//! `{spread(turbulence), -upward}`. Each active particle, in the order the
//! pool visits them, nudges that running value by another random spread
//! before integrating with it, so neighbouring particles feel a similar
//! "wind". Particle N's acceleration is the base of particle N+1's, which
//! makes the pass sequential. The fire scene visits the newest particle
//! first, so the drift accumulates towards the oldest ones.
//!
//! Color decays from yellow `(1, 1, 0)` to red `(1, 0, 0)` over the expected
//! lifetime.

use fastrand::Rng;
use glam::Vec2;

use super::Animator;
use crate::components::entity::PooledEntity;
use crate::components::particle::ParticlePayload;
use crate::components::tint::Tint;

/// `base + rand * spread - rand * spread`.
///
/// The difference of two uniform samples is a triangular distribution
/// centred on `base`, bounded by `±spread`.
pub fn random_spread(rng: &mut Rng, spread: f32, base: f32) -> f32 {
    let mut output = base;
    output += rng.f32() * spread;
    output -= rng.f32() * spread;
    output
}

/// Tint of a particle at decay fraction `fraction`, clamped to `[0, 1]`.
pub fn decay_tint(fraction: f32) -> Tint {
    Tint::from_unit_rgb(1.0, 1.0 - fraction.clamp(0.0, 1.0), 0.0)
}

/// Integrates active particles with a correlated wandering acceleration.
pub struct ParticleAnimator<'a> {
    rng: &'a mut Rng,
    acceleration: Vec2,
    turbulence: f32,
    origin: Vec2,
}

impl<'a> ParticleAnimator<'a> {
    /// Start a frame's pass with a fresh base acceleration.
    pub fn new(rng: &'a mut Rng, upward_acceleration: f32, turbulence: f32, origin: Vec2) -> Self {
        let acceleration = Vec2::new(random_spread(rng, turbulence, 0.0), -upward_acceleration);
        ParticleAnimator {
            rng,
            acceleration,
            turbulence,
            origin,
        }
    }

    /// The running acceleration, as left by the last animated particle.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }
}

impl Animator<ParticlePayload> for ParticleAnimator<'_> {
    fn animate(&mut self, particle: &mut PooledEntity<ParticlePayload>, delta: f32) {
        self.acceleration.x = random_spread(self.rng, self.turbulence, self.acceleration.x);
        self.acceleration.y = random_spread(self.rng, self.turbulence, self.acceleration.y);
        particle.payload.integrate(delta, self.acceleration);
        particle.transform.position = self.origin + particle.payload.position;
        particle.transform.tint = decay_tint(particle.fraction());
    }

    fn settle(&mut self, particle: &mut PooledEntity<ParticlePayload>) {
        particle.transform.visible = false;
    }
}
