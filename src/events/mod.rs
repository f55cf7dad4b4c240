//! Event types and observers used by the host.
//!
//! Submodules:
//! - [`resize`] – stage size changes, propagated to every scene
//! - [`switchscene`] – change which scene is updated and shown
pub mod resize;
pub mod switchscene;
