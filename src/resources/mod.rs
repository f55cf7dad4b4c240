//! ECS resources made available to systems.
//!
//! Overview
//! - `framestats` – smoothed frames-per-second estimate
//! - `hostconfig` – host and scene settings loaded from an INI file
//! - `scenehost` – registered scenes and the active one
//! - `screensize` – current stage dimensions in pixels
//! - `worldtime` – frame time, delta and the millisecond conversion
pub mod framestats;
pub mod hostconfig;
pub mod scenehost;
pub mod screensize;
pub mod worldtime;
