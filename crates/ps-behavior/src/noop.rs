//! A no-op behavior model — agents never produce intents.

use ps_core::AgentId;

use crate::{BehaviorModel, Intent, StepContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Useful as a placeholder in tests or for a passive crowd that simply
/// occupies space.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(&self, _agent: AgentId, _ctx: &StepContext<'_>) -> Vec<Intent> {
        vec![]
    }
}
