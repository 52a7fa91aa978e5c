//! Core agent storage.
//!
//! # Layout
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let r = store.radius[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Fields are `pub` so scenario setups can overwrite sampled attributes
//! directly.  Behavioral state (`exposure`, `panic`) should be changed only
//! through [`AgentStore::set_exposure`] and [`AgentStore::trigger_panic`],
//! which keep the panic latch one-way.

use ps_core::{AgentId, GroupId};

use crate::FriendGroups;

/// Structure-of-Arrays storage for all agent attributes and panic state.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Physical ──────────────────────────────────────────────────────────
    /// Body radius.  Doubles as the perception radius and the step length.
    pub radius: Vec<f64>,

    /// Sampled walking speed.  Carried for reporting; movement scales with
    /// `radius`, not with this.
    pub velocity: Vec<f64>,

    // ── Behavioral ────────────────────────────────────────────────────────
    /// Exposure threshold, constant for the agent's lifetime.
    pub resilience: Vec<u32>,

    /// Consecutive ticks spent with more than one stranger in range.
    pub exposure: Vec<u32>,

    /// One-way panic latch.
    pub panic: Vec<bool>,

    // ── Social ────────────────────────────────────────────────────────────
    /// Friend group of each agent.  `GroupId::INVALID` until
    /// [`assign_groups`](Self::assign_groups) runs.
    pub group: Vec<GroupId>,
}

impl AgentStore {
    /// A store of `count` agents with the given uniform attributes and
    /// fresh behavioral state.
    pub fn uniform(count: usize, radius: f64, velocity: f64, resilience: u32) -> Self {
        Self {
            count,
            radius:     vec![radius; count],
            velocity:   vec![velocity; count],
            resilience: vec![resilience; count],
            exposure:   vec![0; count],
            panic:      vec![false; count],
            group:      vec![GroupId::INVALID; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn is_panicked(&self, agent: AgentId) -> bool {
        self.panic[agent.index()]
    }

    #[inline]
    pub fn exposure(&self, agent: AgentId) -> u32 {
        self.exposure[agent.index()]
    }

    // ── Behavioral updates ────────────────────────────────────────────────

    #[inline]
    pub fn set_exposure(&mut self, agent: AgentId, exposure: u32) {
        self.exposure[agent.index()] = exposure;
    }

    /// Set the panic latch.  There is deliberately no way to clear it.
    #[inline]
    pub fn trigger_panic(&mut self, agent: AgentId) {
        self.panic[agent.index()] = true;
    }

    // ── Social ────────────────────────────────────────────────────────────

    /// Copy each agent's group id out of the partition.
    pub fn assign_groups(&mut self, groups: &FriendGroups) {
        for agent in 0..self.count as u32 {
            self.group[agent as usize] = groups.group_of(AgentId(agent));
        }
    }

    /// Mean of the panic flag (as 0/1) over `agents`; 0 for an empty set.
    pub fn mean_panic(&self, agents: impl IntoIterator<Item = AgentId>) -> f64 {
        let (panicked, total) = agents
            .into_iter()
            .fold((0usize, 0usize), |(p, n), a| (p + self.panic[a.index()] as usize, n + 1));
        if total == 0 {
            0.0
        } else {
            panicked as f64 / total as f64
        }
    }
}
