//! Per-entity progress functions.
//!
//! The [`Pool`](crate::pool::Pool) owns progress accumulation and stage
//! bookkeeping; an [`Animator`] turns that progress into render state.
//!
//! Submodules:
//! - [`card`] – linear transit between two decks
//! - [`particle`] – integrated velocity with correlated turbulence and color decay

pub mod card;
pub mod particle;

use crate::components::entity::PooledEntity;

/// Maps an entity's progress to its visual state.
///
/// [`Pool::advance_active`](crate::pool::Pool::advance_active) calls
/// `animate` once per active entity, in activation order, after adding the
/// frame's delta to its progress. Entities that report complete are moved to
/// the settled group and passed to `settle`.
pub trait Animator<P> {
    fn animate(&mut self, entity: &mut PooledEntity<P>, delta: f32);

    /// Final visual state once the entity leaves the active group.
    fn settle(&mut self, _entity: &mut PooledEntity<P>) {}

    /// Whether the entity should leave the active group this frame.
    fn is_complete(&self, entity: &PooledEntity<P>) -> bool {
        entity.is_complete()
    }
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_f32_endpoints() {
        assert_eq!(lerp_f32(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp_f32(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp_f32(2.0, 10.0, 0.5), 6.0);
    }
}
