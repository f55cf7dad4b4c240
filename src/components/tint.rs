//! Color tint carried by every pooled entity's transform.
//!
//! The [`Tint`] is handed to the render layer unchanged:
//! - For sprites: it modulates the texture color
//! - For text: it is the fill color

use serde::Serialize;

/// RGBA color tint for rendering modulation.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);
    pub const YELLOW: Tint = Tint::new(255, 255, 0, 255);
    pub const RED: Tint = Tint::new(255, 0, 0, 255);

    /// Create a new Tint with the specified RGBA values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque tint from normalized channels in `[0, 1]`.
    ///
    /// Channels outside the range are clamped; NaN maps to 0.
    pub fn from_unit_rgb(r: f32, g: f32, b: f32) -> Self {
        fn channel(v: f32) -> u8 {
            if v.is_nan() {
                return 0;
            }
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(r), channel(g), channel(b), 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::WHITE
    }
}
