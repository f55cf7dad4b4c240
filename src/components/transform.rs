//! Stage-space transform handed to the render layer.
//!
//! Positions are in stage pixels with Y growing downwards, the same
//! convention the shell uses for the stage size it passes to `resize`.

use glam::Vec2;
use serde::Serialize;

use super::tint::Tint;

/// Everything the render layer needs to draw one entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform2D {
    /// Top-left corner in stage space.
    pub position: Vec2,
    /// Uniform scale factor.
    pub scale: f32,
    pub visible: bool,
    pub tint: Tint,
    /// Draw order hint; higher is drawn later.
    pub z_index: i32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D {
            position: Vec2::ZERO,
            scale: 1.0,
            visible: true,
            tint: Tint::WHITE,
            z_index: 0,
        }
    }
}

impl Transform2D {
    pub fn hidden() -> Self {
        Transform2D {
            visible: false,
            ..Default::default()
        }
    }
}
