//! Read-only simulation state passed to every behavior callback.

use ps_agent::{AgentStore, FriendGroups};
use ps_core::Tick;
use ps_space::ContinuousSpace;

/// A read-only view of the world for one agent's turn.
///
/// Built fresh for every activation, so it reflects everything applied
/// earlier in the same tick.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Attributes and panic state of every agent.
    pub agents: &'a AgentStore,

    /// Friend-group partition.
    pub groups: &'a FriendGroups,

    /// Positions of live agents.
    pub space: &'a ContinuousSpace,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        agents: &'a AgentStore,
        groups: &'a FriendGroups,
        space:  &'a ContinuousSpace,
    ) -> Self {
        Self { tick, agents, groups, space }
    }
}
