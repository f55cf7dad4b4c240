//! Card transit between two decks.
//!
//! Slot `i` of a deck sits `i` pixels above the deck origin. While a card
//! moves, its vertical offset blends from its source slot to its destination
//! slot along with the deck origins:
//!
//! ```text
//! x = S.x + f * (D.x - S.x)
//! y = S.y - si + f * (D.y - S.y - di + si)
//! ```
//!
//! At `f = 0` this is the idle position `(S.x, S.y - si)`, at `f = 1` the
//! settled position `(D.x, D.y - di)`.

use glam::Vec2;

use super::{Animator, lerp_f32};
use crate::components::card::CardPayload;
use crate::components::entity::PooledEntity;
use crate::components::stage::Stage;

/// Cached deck origins, recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeckLayout {
    pub source: Vec2,
    pub destination: Vec2,
}

/// Position of a card given its stage and completion fraction.
///
/// Pure: the same layout, payload, stage and fraction always give the same
/// bits.
pub fn card_position(layout: &DeckLayout, card: &CardPayload, stage: Stage, fraction: f32) -> Vec2 {
    let s = layout.source;
    let d = layout.destination;
    let si = card.start_index as f32;
    let di = card.end_index as f32;
    match stage {
        Stage::Idle => Vec2::new(s.x, s.y - si),
        Stage::Settled => Vec2::new(d.x, d.y - di),
        Stage::Active => {
            let vector_y = d.y - s.y - di + si;
            Vec2::new(lerp_f32(s.x, d.x, fraction), s.y - si + fraction * vector_y)
        }
    }
}

/// Draw order of a card: its slot while resting, above every slot in transit.
pub fn card_z_index(card: &CardPayload, stage: Stage, deck_size: usize) -> i32 {
    match stage {
        Stage::Idle => card.start_index as i32,
        Stage::Settled => card.end_index as i32,
        Stage::Active => deck_size as i32,
    }
}

/// Moves active cards along the transit line of a [`DeckLayout`].
pub struct CardAnimator<'a> {
    pub layout: &'a DeckLayout,
    pub deck_size: usize,
}

impl CardAnimator<'_> {
    /// Rewrite an entity's transform from its current stage and progress.
    pub fn place(&self, card: &mut PooledEntity<CardPayload>) {
        let stage = card.stage();
        card.transform.position = card_position(self.layout, &card.payload, stage, card.fraction());
        card.transform.z_index = card_z_index(&card.payload, stage, self.deck_size);
    }
}

impl Animator<CardPayload> for CardAnimator<'_> {
    fn animate(&mut self, card: &mut PooledEntity<CardPayload>, _delta: f32) {
        self.place(card);
    }

    fn settle(&mut self, card: &mut PooledEntity<CardPayload>) {
        self.place(card);
    }
}
