//! The crowd-panic rule: exposure counting, the panic latch, and weighted
//! steering toward the exit and friends and away from strangers.
//!
//! # One turn
//!
//! ```text
//! N        = space.neighbors_within(pos, radius)
//! unwanted = N minus self minus friend group
//! exposure = |unwanted| > 1 ? exposure + 1 : 0
//! panic   |= exposure > resilience
//!
//! exit     = heading(pos → exit)
//! friend   = heading(pos → nearest live group member, self included)
//!            or `exit` if no member is placed
//! away     = normalize(Σ (pos − u.pos) for u in unwanted)
//! pos'     = pos + radius · (w_exit·exit + w_friends·friend + w_strangers·away)
//! leave if |pos − exit| < radius   (measured before the move)
//! ```
//!
//! Both headings and the repulsion sum collapse to zero below
//! [`HEADING_EPSILON`](ps_core::HEADING_EPSILON).

use ps_core::{AgentId, Vec2, distance, normalized_heading};

use crate::{BehaviorError, BehaviorModel, BehaviorResult, Intent, StepContext};

// ── SteeringWeights ───────────────────────────────────────────────────────────

/// Relative pull of the three steering components.  Non-negative, sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringWeights {
    pub exit:      f64,
    pub friends:   f64,
    pub strangers: f64,
}

impl Default for SteeringWeights {
    fn default() -> Self {
        Self { exit: 0.5, friends: 0.25, strangers: 0.25 }
    }
}

impl SteeringWeights {
    pub fn new(exit: f64, friends: f64, strangers: f64) -> BehaviorResult<Self> {
        let all = [exit, friends, strangers];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(BehaviorError::Config(format!(
                "steering weights must be non-negative (got {exit}, {friends}, {strangers})"
            )));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(BehaviorError::Config(format!("steering weights must sum to 1 (got {sum})")));
        }
        Ok(Self { exit, friends, strangers })
    }
}

// ── PanicBehavior ─────────────────────────────────────────────────────────────

/// The evacuation behavior: every agent heads for a single exit point.
#[derive(Debug, Clone, Copy)]
pub struct PanicBehavior {
    weights: SteeringWeights,
    exit:    Vec2,
}

impl Default for PanicBehavior {
    /// Default weights, exit at the origin.
    fn default() -> Self {
        Self { weights: SteeringWeights::default(), exit: Vec2::ZERO }
    }
}

impl PanicBehavior {
    pub fn new(weights: SteeringWeights, exit: Vec2) -> Self {
        Self { weights, exit }
    }

    /// Default weights with a different exit point.
    pub fn with_exit(exit: Vec2) -> Self {
        Self { exit, ..Self::default() }
    }

    pub fn exit(&self) -> Vec2 {
        self.exit
    }

    pub fn weights(&self) -> SteeringWeights {
        self.weights
    }

    /// Neighbors in range that are neither `agent` nor in its friend group.
    pub fn unwanted_neighbors(&self, agent: AgentId, pos: Vec2, ctx: &StepContext<'_>) -> Vec<AgentId> {
        let radius = ctx.agents.radius[agent.index()];
        ctx.space
            .neighbors_within(pos, radius)
            .into_iter()
            .filter(|&n| n != agent && !ctx.groups.are_friends(agent, n))
            .collect()
    }

    /// Position of the closest placed member of `agent`'s group.
    ///
    /// The group holds `agent` itself, so while it is placed at `pos` this is
    /// `pos` and the friend heading is zero.  Ties go to the member listed
    /// first in the group.
    pub fn nearest_friend(&self, agent: AgentId, pos: Vec2, ctx: &StepContext<'_>) -> Option<Vec2> {
        ctx.groups
            .friends_of(agent)
            .iter()
            .filter_map(|&f| ctx.space.position(f))
            .fold(None, |best: Option<(f64, Vec2)>, p| {
                let d = distance(pos, p);
                match best {
                    Some((bd, _)) if bd <= d => best,
                    _ => Some((d, p)),
                }
            })
            .map(|(_, p)| p)
    }

    /// Exposure after this turn, given how many strangers are in range.
    #[inline]
    pub fn next_exposure(current: u32, strangers: usize) -> u32 {
        if strangers > 1 { current.saturating_add(1) } else { 0 }
    }

    /// Where the agent at `pos` wants to go, before clamping.
    pub fn steer(
        &self,
        pos:      Vec2,
        radius:   f64,
        friend:   Option<Vec2>,
        unwanted: impl IntoIterator<Item = Vec2>,
    ) -> Vec2 {
        let to_exit = normalized_heading(pos, self.exit);
        let to_friend = friend.map_or(to_exit, |f| normalized_heading(pos, f));
        let away = unwanted
            .into_iter()
            .fold(Vec2::ZERO, |acc, u| acc + (pos - u))
            .normalized_or_zero();

        let w = self.weights;
        pos + (to_exit * w.exit + to_friend * w.friends + away * w.strangers) * radius
    }
}

impl BehaviorModel for PanicBehavior {
    fn step(&self, agent: AgentId, ctx: &StepContext<'_>) -> Vec<Intent> {
        let Some(pos) = ctx.space.position(agent) else {
            return vec![];
        };
        let i = agent.index();
        let radius = ctx.agents.radius[i];

        // ── Exposure & panic ──────────────────────────────────────────────
        let unwanted = self.unwanted_neighbors(agent, pos, ctx);
        let exposure = Self::next_exposure(ctx.agents.exposure[i], unwanted.len());

        let mut intents = Vec::with_capacity(4);
        intents.push(Intent::SetExposure(exposure));
        if exposure > ctx.agents.resilience[i] && !ctx.agents.panic[i] {
            intents.push(Intent::Panic);
        }

        // ── Movement ──────────────────────────────────────────────────────
        let exit_distance = distance(pos, self.exit);
        let friend = self.nearest_friend(agent, pos, ctx);
        let target = self.steer(
            pos,
            radius,
            friend,
            unwanted.iter().filter_map(|&u| ctx.space.position(u)),
        );
        intents.push(Intent::MoveTo(target));

        if exit_distance < radius {
            intents.push(Intent::Exit);
        }
        intents
    }
}
