//! Plain data row types written by output backends.

/// One agent's behavioral state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub group:    u32,
    pub panic:    bool,
    pub exposure: u32,
    /// Position; `None` once the agent has left through the exit.
    pub x:        Option<f64>,
    pub y:        Option<f64>,
}

/// Model-level statistics for one tick, taken before activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub mean_panic:  f64,
    pub live_agents: u64,
}
