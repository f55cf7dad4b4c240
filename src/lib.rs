//! Scenepool library.
//!
//! A frame-driven animation host built on pooled entities. Each scene pairs
//! a fixed-period scheduler with a pool of reusable entities and an animator
//! that moves them through their idle, active and settled stages. The host
//! keeps several scenes, updates the active one every frame and propagates
//! stage resizes to all of them. Rendering is left to the caller, who reads
//! plain [`EntityView`](scenes::EntityView) snapshots.
//!
//! This module exposes the components, pool, animators, scenes and the ECS
//! resources, systems and events for use in integration tests and as a
//! reusable library.

pub mod animation;
pub mod components;
pub mod error;
pub mod events;
pub mod host;
pub mod pool;
pub mod resources;
pub mod scenes;
pub mod systems;
