//! Host systems.
//!
//! Submodules overview
//! - [`framestats`] – smoothed frames-per-second estimate
//! - [`scenes`] – advance the active scene
//! - [`time`] – update frame time and delta

pub mod framestats;
pub mod scenes;
pub mod time;
