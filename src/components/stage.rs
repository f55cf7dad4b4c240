use std::fmt;

use serde::Serialize;

/// Life-cycle position of a pooled entity.
///
/// Transitions run `Idle -> Active -> Settled`. Recyclable pools also allow
/// `Settled -> Active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Waiting in the source group, never activated.
    Idle,
    /// Progress is advancing every frame.
    Active,
    /// Finished; terminal unless the pool recycles.
    Settled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::Active => "active",
            Stage::Settled => "settled",
        };
        f.write_str(s)
    }
}
