//! Stage size resource.
//!
//! Stores the current stage dimensions in pixels. Updated by the resize
//! observer before the new size is propagated to the scenes.

use bevy_ecs::prelude::Resource;

/// Current stage size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: f32,
    /// Height in pixels.
    pub h: f32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        ScreenSize { w: 800.0, h: 600.0 }
    }
}
