//! Fixed-capacity entity pool and its scheduler.
//!
//! A [`Pool`] owns every entity of a scene and partitions them into three
//! groups:
//!
//! - **idle**: a stack; the highest index is activated first
//! - **active**: the working set in activation order, compacted every frame
//! - **settled**: a ring; the oldest settled entity is recycled first
//!
//! Entities are never created or destroyed after construction. A
//! [`RecyclePolicy::Terminal`] pool drains its idle stack once and then
//! reports exhaustion; a [`RecyclePolicy::Recycle`] pool starts fully
//! settled and cycles entities back to active forever.

pub mod scheduler;

use std::collections::VecDeque;

use log::debug;
use serde::Serialize;
use smallvec::SmallVec;

use crate::animation::Animator;
use crate::components::entity::PooledEntity;
use crate::components::stage::Stage;
use crate::error::{Result, SceneError, ensure_positive};

/// What `activate_next` does once the idle stack is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecyclePolicy {
    /// Settled is terminal; activation stops when idle runs out.
    Terminal,
    /// Settled entities are reactivated, oldest first.
    Recycle,
}

/// Group sizes at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StageCounts {
    pub idle: usize,
    pub active: usize,
    pub settled: usize,
}

impl StageCounts {
    pub fn total(&self) -> usize {
        self.idle + self.active + self.settled
    }
}

/// Direction in which `advance_active_in` walks the active group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitOrder {
    /// Earliest activation first.
    #[default]
    OldestFirst,
    /// Latest activation first.
    NewestFirst,
}

/// Ids of entities settled during one `advance_active` pass.
pub type SettledIds = SmallVec<[usize; 8]>;

#[derive(Debug, Clone)]
pub struct Pool<P> {
    entities: Vec<PooledEntity<P>>,
    idle: Vec<usize>,
    active: Vec<usize>,
    settled: VecDeque<usize>,
    policy: RecyclePolicy,
}

impl<P> Pool<P> {
    /// Build a terminal pool with every entity idle.
    ///
    /// Entities get ids in iteration order; the last one is activated first.
    pub fn with_idle(
        payloads: impl IntoIterator<Item = P>,
        target_duration: f32,
    ) -> Result<Self> {
        Self::build(payloads, target_duration, Stage::Idle, RecyclePolicy::Terminal)
    }

    /// Build a recycling pool with every entity settled.
    ///
    /// Entities are recycled in id order.
    pub fn with_settled(
        payloads: impl IntoIterator<Item = P>,
        target_duration: f32,
    ) -> Result<Self> {
        Self::build(payloads, target_duration, Stage::Settled, RecyclePolicy::Recycle)
    }

    fn build(
        payloads: impl IntoIterator<Item = P>,
        target_duration: f32,
        stage: Stage,
        policy: RecyclePolicy,
    ) -> Result<Self> {
        ensure_positive("target_duration", target_duration)?;
        let entities: Vec<_> = payloads
            .into_iter()
            .enumerate()
            .map(|(id, payload)| PooledEntity::new(id, stage, target_duration, payload))
            .collect();
        if entities.is_empty() {
            return Err(SceneError::InvalidConfiguration(
                "pool needs at least one entity".into(),
            ));
        }
        let ids = 0..entities.len();
        let (idle, settled): (Vec<usize>, VecDeque<usize>) = match stage {
            Stage::Settled => (Vec::new(), ids.collect()),
            _ => (ids.collect(), VecDeque::new()),
        };
        Ok(Pool {
            active: Vec::with_capacity(entities.len()),
            entities,
            idle,
            settled,
            policy,
        })
    }

    pub fn capacity(&self) -> usize {
        self.entities.len()
    }

    pub fn counts(&self) -> StageCounts {
        StageCounts {
            idle: self.idle.len(),
            active: self.active.len(),
            settled: self.settled.len(),
        }
    }

    /// Nothing left to activate and nothing moving.
    pub fn is_exhausted(&self) -> bool {
        self.policy == RecyclePolicy::Terminal && self.idle.is_empty() && self.active.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&PooledEntity<P>> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut PooledEntity<P>> {
        self.entities.get_mut(id)
    }

    /// All entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PooledEntity<P>> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PooledEntity<P>> {
        self.entities.iter_mut()
    }

    /// Active ids, oldest activation first.
    pub fn active_ids(&self) -> &[usize] {
        &self.active
    }

    /// Settled ids, next to be recycled first.
    pub fn settled_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.settled.iter().copied()
    }

    /// Move the next entity to active with zero progress.
    ///
    /// Terminal pools pop the idle stack and return `None` once it is empty.
    /// Recycling pools take the oldest settled entity, or the oldest active
    /// one if everything is still moving.
    pub fn activate_next(&mut self) -> Option<&mut PooledEntity<P>> {
        let id = match self.idle.pop() {
            Some(id) => id,
            None => match self.policy {
                RecyclePolicy::Terminal => return None,
                RecyclePolicy::Recycle => match self.settled.pop_front() {
                    Some(id) => id,
                    None if !self.active.is_empty() => {
                        let id = self.active.remove(0);
                        debug!("pool saturated, restarting active entity {id}");
                        id
                    }
                    None => return None,
                },
            },
        };
        self.active.push(id);
        let entity = &mut self.entities[id];
        entity.activate();
        Some(entity)
    }

    /// Move an active entity to the settled group ahead of completion.
    ///
    /// Returns `false` if the entity is not active.
    pub fn settle(&mut self, id: usize) -> bool {
        let Some(pos) = self.active.iter().position(|&a| a == id) else {
            return false;
        };
        self.active.remove(pos);
        self.entities[id].settle();
        self.settled.push_back(id);
        true
    }

    /// Advance every active entity by `delta` and settle the completed ones.
    ///
    /// Entities are visited oldest activation first. See
    /// [`advance_active_in`](Self::advance_active_in).
    pub fn advance_active<A: Animator<P>>(&mut self, delta: f32, animator: &mut A) -> SettledIds {
        self.advance_active_in(delta, VisitOrder::OldestFirst, animator)
    }

    /// Advance every active entity in the given order and settle the
    /// completed ones.
    ///
    /// Completed entities join the settled ring in visit order. The active
    /// group is compacted in the same pass, so none is skipped and the
    /// survivors keep their activation order.
    pub fn advance_active_in<A: Animator<P>>(
        &mut self,
        delta: f32,
        order: VisitOrder,
        animator: &mut A,
    ) -> SettledIds {
        let mut settled = SettledIds::new();
        let len = self.active.len();
        match order {
            VisitOrder::OldestFirst => {
                let mut keep = 0;
                for read in 0..len {
                    let id = self.active[read];
                    if self.step(id, delta, animator, &mut settled) {
                        self.active[keep] = id;
                        keep += 1;
                    }
                }
                self.active.truncate(keep);
            }
            VisitOrder::NewestFirst => {
                // Survivors are packed against the tail.
                let mut keep = len;
                for read in (0..len).rev() {
                    let id = self.active[read];
                    if self.step(id, delta, animator, &mut settled) {
                        keep -= 1;
                        self.active[keep] = id;
                    }
                }
                self.active.drain(..keep);
            }
        }
        settled
    }

    /// Advance one active entity. Returns `true` if it stays active.
    fn step<A: Animator<P>>(
        &mut self,
        id: usize,
        delta: f32,
        animator: &mut A,
        settled: &mut SettledIds,
    ) -> bool {
        let entity = &mut self.entities[id];
        entity.advance(delta);
        animator.animate(entity, delta);
        if !animator.is_complete(entity) {
            return true;
        }
        entity.settle();
        animator.settle(entity);
        self.settled.push_back(id);
        settled.push(id);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ProgressOnly;

    impl<P> Animator<P> for ProgressOnly {
        fn animate(&mut self, _entity: &mut PooledEntity<P>, _delta: f32) {}
    }

    /// Records the visit order of one pass.
    #[derive(Default)]
    struct Visits(Vec<usize>);

    impl<P> Animator<P> for Visits {
        fn animate(&mut self, entity: &mut PooledEntity<P>, _delta: f32) {
            self.0.push(entity.id());
        }
    }

    struct NeverDone;

    impl<P> Animator<P> for NeverDone {
        fn animate(&mut self, _entity: &mut PooledEntity<P>, _delta: f32) {}
        fn is_complete(&self, _entity: &PooledEntity<P>) -> bool {
            false
        }
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let r = Pool::<()>::with_idle(Vec::new(), 1.0);
        assert!(matches!(r, Err(SceneError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        assert!(Pool::with_idle(vec![(); 3], 0.0).is_err());
        assert!(Pool::with_settled(vec![(); 3], -2.0).is_err());
    }

    #[test]
    fn test_idle_drains_lifo() {
        let mut pool = Pool::with_idle(0..3, 5.0).unwrap();
        let order: Vec<usize> =
            std::iter::from_fn(|| pool.activate_next().map(|e| e.id())).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert!(pool.activate_next().is_none());
        assert_eq!(pool.counts(), StageCounts { idle: 0, active: 3, settled: 0 });
    }

    #[test]
    fn test_completion_moves_to_settled_once() {
        let mut pool = Pool::with_idle(0..2, 4.0).unwrap();
        pool.activate_next();
        let done = pool.advance_active(3.0, &mut ProgressOnly);
        assert!(done.is_empty());
        let done = pool.advance_active(3.0, &mut ProgressOnly);
        assert_eq!(done.as_slice(), &[1]);
        assert_eq!(pool.get(1).unwrap().stage(), Stage::Settled);
        let done = pool.advance_active(3.0, &mut ProgressOnly);
        assert!(done.is_empty());
        assert_eq!(pool.counts().settled, 1);
    }

    #[test]
    fn test_compaction_does_not_skip_neighbours() {
        let mut pool = Pool::with_idle(0..4, 2.0).unwrap();
        pool.activate_next();
        pool.activate_next();
        pool.advance_active(1.0, &mut ProgressOnly);
        pool.activate_next();
        // Entities 3 and 2 complete together, entity 1 follows behind.
        let done = pool.advance_active(1.0, &mut ProgressOnly);
        assert_eq!(done.as_slice(), &[3, 2]);
        assert_eq!(pool.active_ids(), &[1]);
        assert!((pool.get(1).unwrap().progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_newest_first_visits_latest_activation_first() {
        let mut pool = Pool::with_settled(0..4, 3.0).unwrap();
        pool.activate_next();
        pool.advance_active(1.0, &mut ProgressOnly);
        pool.activate_next();
        pool.activate_next();
        let mut visits = Visits::default();
        pool.advance_active_in(1.0, VisitOrder::NewestFirst, &mut visits);
        assert_eq!(visits.0, vec![2, 1, 0]);
        assert_eq!(pool.active_ids(), &[0, 1, 2]);
    }

    #[test]
    fn test_newest_first_compaction_keeps_activation_order() {
        let mut pool = Pool::with_settled(0..4, 2.0).unwrap();
        pool.activate_next();
        pool.advance_active(1.0, &mut ProgressOnly);
        pool.activate_next();
        pool.activate_next();
        // Entity 0 completes in the middle of the pass.
        let done = pool.advance_active_in(1.0, VisitOrder::NewestFirst, &mut ProgressOnly);
        assert_eq!(done.as_slice(), &[0]);
        assert_eq!(pool.active_ids(), &[1, 2]);
        let done = pool.advance_active_in(1.0, VisitOrder::NewestFirst, &mut ProgressOnly);
        assert_eq!(done.as_slice(), &[2, 1]);
        assert!(pool.active_ids().is_empty());
        assert_eq!(pool.settled_ids().collect::<Vec<_>>(), vec![3, 0, 2, 1]);
    }

    #[test]
    fn test_terminal_pool_exhausts() {
        let mut pool = Pool::with_idle(0..1, 1.0).unwrap();
        assert!(!pool.is_exhausted());
        pool.activate_next();
        pool.advance_active(1.0, &mut ProgressOnly);
        assert!(pool.is_exhausted());
        assert!(pool.activate_next().is_none());
    }

    #[test]
    fn test_recycle_takes_oldest_settled_and_requeues_at_tail() {
        let mut pool = Pool::with_settled(0..3, 1.0).unwrap();
        assert_eq!(pool.activate_next().map(|e| e.id()), Some(0));
        pool.advance_active(1.0, &mut ProgressOnly);
        assert_eq!(pool.settled_ids().collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(pool.activate_next().map(|e| e.id()), Some(1));
    }

    #[test]
    fn test_recycle_falls_back_to_oldest_active() {
        let mut pool = Pool::with_settled(0..2, 100.0).unwrap();
        pool.activate_next();
        pool.advance_active(10.0, &mut ProgressOnly);
        pool.activate_next();
        let restarted = pool.activate_next().map(|e| (e.id(), e.progress()));
        assert_eq!(restarted, Some((0, 0.0)));
        assert_eq!(pool.active_ids(), &[1, 0]);
    }

    #[test]
    fn test_settle_forces_transition() {
        let mut pool = Pool::with_settled(0..2, 1.0).unwrap();
        pool.activate_next();
        assert!(pool.settle(0));
        assert!(!pool.settle(0));
        assert_eq!(pool.counts(), StageCounts { idle: 0, active: 0, settled: 2 });
    }

    #[test]
    fn test_animator_can_hold_completion() {
        let mut pool = Pool::with_settled(0..1, 1.0).unwrap();
        pool.activate_next();
        pool.advance_active(5.0, &mut NeverDone);
        assert_eq!(pool.active_ids(), &[0]);
        assert!((pool.get(0).unwrap().progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_counts_are_conserved() {
        let mut pool = Pool::with_idle(0..5, 3.0).unwrap();
        for _ in 0..10 {
            pool.activate_next();
            pool.advance_active(1.0, &mut ProgressOnly);
            assert_eq!(pool.counts().total(), pool.capacity());
        }
    }
}
