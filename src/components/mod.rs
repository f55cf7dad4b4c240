//! Data carried by pooled entities.
//!
//! Submodules overview:
//! - [`card`] – source/destination slot indices for a dealt card
//! - [`composition`] – a laid-out line of words and images
//! - [`entity`] – the generic poolable unit with stage and progress
//! - [`particle`] – velocity and offset of a fire particle
//! - [`stage`] – Idle/Active/Settled life-cycle position
//! - [`tint`] – RGBA color modulation
//! - [`transform`] – stage-space position, scale, visibility and tint

pub mod card;
pub mod composition;
pub mod entity;
pub mod particle;
pub mod stage;
pub mod tint;
pub mod transform;
