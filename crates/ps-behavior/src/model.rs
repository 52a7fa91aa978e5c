//! The `BehaviorModel` trait — the extension point for agent decision rules.

use ps_core::AgentId;

use crate::{Intent, StepContext};

/// Pluggable agent behavior.
///
/// Called once per live agent per tick.  Implementations only read the
/// world; every change is expressed as an [`Intent`] and applied by the
/// simulation loop.
///
/// # Example
///
/// ```rust,ignore
/// struct WalkLeft;
///
/// impl BehaviorModel for WalkLeft {
///     fn step(&self, agent: AgentId, ctx: &StepContext<'_>) -> Vec<Intent> {
///         match ctx.space.position(agent) {
///             Some(p) => vec![Intent::MoveTo(p - Vec2::new(0.1, 0.0))],
///             None    => vec![],
///         }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Decide what `agent` does this tick.
    ///
    /// An empty `Vec` means "do nothing".
    fn step(&self, agent: AgentId, ctx: &StepContext<'_>) -> Vec<Intent>;
}
