//! Agent intents — the state changes an agent requests during its turn.

use ps_core::Vec2;

/// One change an agent wants applied at the end of its turn.
///
/// Intents are applied in the order returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Overwrite the agent's exposure counter.
    SetExposure(u32),

    /// Latch the agent's panic flag.
    Panic,

    /// Move to this point.  The space clamps it into the arena.
    MoveTo(Vec2),

    /// Leave through the exit: removed from the space and the scheduler.
    Exit,
}
