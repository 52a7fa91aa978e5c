//! `RandomActivation` — every live agent once per tick, in a fresh random order.

use ps_core::{AgentId, SimRng};

/// Live-set bookkeeping and activation ordering.
///
/// The live set only ever shrinks: agents are registered once at
/// construction and removed when they leave.
#[derive(Clone, Debug)]
pub struct RandomActivation {
    live:       Vec<bool>,
    live_count: usize,
    steps:      u64,
}

impl RandomActivation {
    /// Register agents `0..count` as live.
    pub fn new(count: usize) -> Self {
        Self {
            live:       vec![true; count],
            live_count: count,
            steps:      0,
        }
    }

    /// Number of live agents.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    #[inline]
    pub fn is_live(&self, agent: AgentId) -> bool {
        self.live.get(agent.index()).copied().unwrap_or(false)
    }

    /// Live agents in ascending id order.
    pub fn live_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l)
            .map(|(i, _)| AgentId(i as u32))
    }

    /// Ticks started so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Start a tick: snapshot the live set and shuffle it.
    ///
    /// The returned order is independent of the previous tick's order.
    pub fn activation_order(&mut self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = self.live_ids().collect();
        rng.shuffle(&mut order);
        self.steps += 1;
        order
    }

    /// Drop `agent` from the live set.  Returns `false` if it was already gone.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        match self.live.get_mut(agent.index()) {
            Some(l) if *l => {
                *l = false;
                self.live_count -= 1;
                true
            }
            _ => false,
        }
    }
}
