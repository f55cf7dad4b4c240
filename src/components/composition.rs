//! Composition payload: a single line of mixed words and images.
//!
//! Items are laid out left to right. Images are scaled so their height
//! matches the font size, words are measured by a
//! [`TextMetrics`](crate::scenes::composition::TextMetrics) implementation.

use arrayvec::ArrayVec;
use glam::Vec2;

/// Number of items in every composition.
pub const ITEMS_PER_COMPOSITION: usize = 3;

/// What one composition item shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemVisual {
    /// An image, by asset key.
    Image(String),
    /// A word rendered with the scene's font size and color.
    Text(String),
}

/// One laid-out item of a composition.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionItem {
    pub visual: ItemVisual,
    /// Horizontal offset from the composition's left edge.
    pub offset_x: f32,
    /// Scale applied to the item (images only; words stay at 1).
    pub scale: f32,
    /// Laid-out size after scaling.
    pub size: Vec2,
}

/// Payload of one composition entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionPayload {
    pub items: ArrayVec<CompositionItem, ITEMS_PER_COMPOSITION>,
    pub font_size: f32,
    /// Bounding size of the whole line.
    pub size: Vec2,
}

impl CompositionPayload {
    /// Lay out `pieces` left to right.
    ///
    /// Each piece comes with its unscaled size and the scale to apply.
    /// Pieces past [`ITEMS_PER_COMPOSITION`] are dropped.
    pub fn layout(
        pieces: impl IntoIterator<Item = (ItemVisual, Vec2, f32)>,
        font_size: f32,
    ) -> Self {
        let mut items = ArrayVec::new();
        let mut x = 0.0;
        let mut height: f32 = 0.0;
        for (visual, natural, scale) in pieces.into_iter().take(ITEMS_PER_COMPOSITION) {
            let size = natural * scale;
            items.push(CompositionItem {
                visual,
                offset_x: x,
                scale,
                size,
            });
            x += size.x;
            height = height.max(size.y);
        }
        CompositionPayload {
            items,
            font_size,
            size: Vec2::new(x, height),
        }
    }
}
