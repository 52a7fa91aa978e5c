//! The `Sim` struct and its tick loop.

use ps_agent::{AgentStore, FriendGroups};
use ps_behavior::{BehaviorModel, Intent, StepContext};
use ps_core::{AgentId, ModelParams, SimConfig, SimRng, Tick};
use ps_schedule::RandomActivation;
use ps_space::ContinuousSpace;

use crate::{AgentView, SimObserver, SimResult, SimView, TickStats};

/// The main simulation runner.
///
/// `Sim<B>` holds all model state and drives the tick loop:
///
/// 1. **Collect**: record [`TickStats`] over the live set into `history`
///    and notify observers (plus a snapshot on interval ticks).
/// 2. **Activate**: shuffle the live set and run each agent that is still
///    live when its turn comes.  Its intents are applied before the next
///    agent decides.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Run configuration (length, seed, snapshot cadence, topology).
    pub config: SimConfig,

    /// The parameters the model was built from.
    pub params: ModelParams,

    /// Master RNG.  Used for the per-tick activation shuffle.
    pub(crate) rng: SimRng,

    /// Agent attributes and behavioral state (SoA arrays).
    pub(crate) agents: AgentStore,

    /// Friend-group partition, fixed for the whole run.
    pub(crate) groups: FriendGroups,

    /// Positions of live agents.
    pub(crate) space: ContinuousSpace,

    /// Live set and activation order.
    pub(crate) scheduler: RandomActivation,

    /// The behavior model.  Called once per live agent per tick.
    pub behavior: B,

    /// Next tick to execute.
    pub(crate) tick: Tick,

    /// One entry per executed tick, collected before activation.
    pub(crate) history: Vec<TickStats>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Stops early once nobody is left if `config.stop_when_evacuated` is
    /// set.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            if self.config.stop_when_evacuated && self.scheduler.is_empty() {
                tracing::info!(tick = self.tick.0, "stopping early: arena evacuated");
                break;
            }
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Execute one tick and return how many agents were activated.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.tick;

        // ── Collect ───────────────────────────────────────────────────────
        let stats = self.view().stats();
        self.history.push(stats);
        tracing::debug!(
            tick = now.0,
            live = stats.live_agents,
            mean_panic = stats.mean_panic,
            "tick"
        );
        observer.on_tick_start(now, &stats);
        if now.is_every(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(now, &self.view());
        }

        // ── Activate ──────────────────────────────────────────────────────
        let was_live = self.scheduler.live_count();
        let order = self.scheduler.activation_order(&mut self.rng);
        let mut activated = 0;
        for agent in order {
            // Removed earlier this tick.
            if !self.scheduler.is_live(agent) {
                continue;
            }
            let intents = {
                let ctx = StepContext::new(now, &self.agents, &self.groups, &self.space);
                self.behavior.step(agent, &ctx)
            };
            self.apply_intents(agent, intents)?;
            activated += 1;
        }

        if was_live > 0 && self.scheduler.is_empty() {
            tracing::info!(tick = now.0, "all agents have left the arena");
        }

        observer.on_tick_end(now, activated);
        self.tick = now.next();
        Ok(activated)
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Borrowed view of the whole model at the current tick.
    pub fn view(&self) -> SimView<'_> {
        SimView {
            tick:      self.tick,
            agents:    &self.agents,
            groups:    &self.groups,
            space:     &self.space,
            scheduler: &self.scheduler,
        }
    }

    /// Live agents in ascending id order.
    pub fn live_agents(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.view().live_agents()
    }

    /// Number of agents still in the arena.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.scheduler.live_count()
    }

    /// Next tick to execute.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn groups(&self) -> &FriendGroups {
        &self.groups
    }

    pub fn space(&self) -> &ContinuousSpace {
        &self.space
    }

    pub fn scheduler(&self) -> &RandomActivation {
        &self.scheduler
    }

    /// Statistics recorded so far, one entry per executed tick.
    pub fn history(&self) -> &[TickStats] {
        &self.history
    }

    // ── Apply ─────────────────────────────────────────────────────────────

    fn apply_intents(&mut self, agent: AgentId, intents: Vec<Intent>) -> SimResult<()> {
        for intent in intents {
            match intent {
                Intent::SetExposure(e) => self.agents.set_exposure(agent, e),

                Intent::Panic => {
                    if !self.agents.is_panicked(agent) {
                        tracing::trace!(agent = agent.0, tick = self.tick.0, "panicked");
                    }
                    self.agents.trigger_panic(agent);
                }

                Intent::MoveTo(target) => {
                    self.space.move_agent(agent, target)?;
                }

                Intent::Exit => {
                    self.space.remove(agent);
                    self.scheduler.remove(agent);
                    tracing::trace!(agent = agent.0, tick = self.tick.0, "exited");
                }
            }
        }
        Ok(())
    }
}
