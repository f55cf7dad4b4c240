//! Particle payload for the fire scene.

use glam::Vec2;

/// Motion state of one fire particle.
///
/// Age is the owning entity's progress; the expected lifetime is its target
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticlePayload {
    /// Current velocity in pixels per frame.
    pub velocity: Vec2,
    /// Offset from the emitter origin.
    pub position: Vec2,
}

impl ParticlePayload {
    /// Restart at the emitter origin with a fresh velocity.
    pub fn reset(&mut self, start_velocity: Vec2) {
        self.velocity = start_velocity;
        self.position = Vec2::ZERO;
    }

    /// Semi-implicit Euler step: velocity first, then position.
    pub fn integrate(&mut self, delta: f32, acceleration: Vec2) {
        self.velocity += acceleration * delta;
        self.position += self.velocity * delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_integrate_updates_velocity_before_position() {
        let mut p = ParticlePayload::default();
        p.integrate(2.0, Vec2::new(1.0, -0.5));
        assert!(approx_eq(p.velocity.x, 2.0));
        assert!(approx_eq(p.velocity.y, -1.0));
        // Position uses the already updated velocity.
        assert!(approx_eq(p.position.x, 4.0));
        assert!(approx_eq(p.position.y, -2.0));
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut p = ParticlePayload {
            velocity: Vec2::new(3.0, 3.0),
            position: Vec2::new(10.0, -7.0),
        };
        p.reset(Vec2::new(0.5, -0.25));
        assert_eq!(p.position, Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::new(0.5, -0.25));
    }
}
