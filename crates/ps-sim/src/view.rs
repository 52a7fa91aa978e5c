//! Read-only views of simulation state and the per-tick statistics record.

use ps_agent::{AgentStore, FriendGroups};
use ps_core::{AgentId, GroupId, Tick, Vec2};
use ps_schedule::RandomActivation;
use ps_space::ContinuousSpace;

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Model-level statistics collected at the start of a tick, before any agent
/// moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    pub tick: Tick,

    /// Fraction of live agents that have panicked; 0 when none are left.
    pub mean_panic: f64,

    /// Agents still in the arena.
    pub live_agents: usize,
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// One live agent as seen from outside the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Vec2,
    pub radius:   f64,
    pub panic:    bool,
    pub exposure: u32,
    pub group:    GroupId,
}

// ── SimView ───────────────────────────────────────────────────────────────────

/// Borrowed snapshot of the whole model, handed to observers.
#[derive(Clone, Copy)]
pub struct SimView<'a> {
    pub tick:      Tick,
    pub agents:    &'a AgentStore,
    pub groups:    &'a FriendGroups,
    pub space:     &'a ContinuousSpace,
    pub scheduler: &'a RandomActivation,
}

impl<'a> SimView<'a> {
    /// Live agents in ascending id order.
    pub fn live_agents(self) -> impl Iterator<Item = AgentView> + 'a {
        let agents = self.agents;
        let space = self.space;
        let scheduler = self.scheduler;
        scheduler.live_ids().filter_map(move |id| {
            let i = id.index();
            space.position(id).map(|position| AgentView {
                id,
                position,
                radius:   agents.radius[i],
                panic:    agents.panic[i],
                exposure: agents.exposure[i],
                group:    agents.group[i],
            })
        })
    }

    /// Statistics over the current live set.
    pub fn stats(&self) -> TickStats {
        TickStats {
            tick:        self.tick,
            mean_panic:  self.agents.mean_panic(self.scheduler.live_ids()),
            live_agents: self.scheduler.live_count(),
        }
    }
}
