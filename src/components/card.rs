//! Card payload: which slot a card leaves and which slot it lands in.

/// Slot indices for one card travelling from the source deck to the
/// destination deck.
///
/// Slot `i` sits `i` pixels above the deck origin, so higher indices are
/// higher up the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPayload {
    /// Index in the source deck.
    pub start_index: usize,
    /// Index in the destination deck.
    pub end_index: usize,
}

impl CardPayload {
    /// Payload for the card at `start_index` in a deck of `count` cards.
    ///
    /// Dealing takes the top card first, so the top of the source deck lands
    /// at the bottom of the destination deck.
    pub fn dealt_from(start_index: usize, count: usize) -> Self {
        CardPayload {
            start_index,
            end_index: count.saturating_sub(start_index + 1),
        }
    }
}
