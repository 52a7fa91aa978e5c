//! Fluent builder for constructing a [`Sim`].

use ps_agent::{AgentStore, AgentStoreBuilder, FriendGroups};
use ps_behavior::{BehaviorModel, PanicBehavior};
use ps_core::{AgentId, ModelParams, SimConfig, SimRng, Tick, Vec2};
use ps_schedule::RandomActivation;
use ps_space::ContinuousSpace;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, snapshot cadence, topology
/// - [`ModelParams`] — population, arena, group sizes, attribute bounds
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.behavior(b)`  | `PanicBehavior::default()` (exit at the origin)  |
/// | `.agents(s)`    | Radii/velocities sampled from `params`           |
/// | `.positions(v)` | Uniform over `[0, width) × [0, height)`          |
/// | `.groups(g)`    | Random partition with `params` group sizes       |
///
/// The master RNG is consumed in a fixed order (attributes, placement,
/// partition, then one shuffle per tick); supplying an input skips its draws.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, params)
///     .positions(vec![Vec2::new(0.1, 0.1)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel = PanicBehavior> {
    config:    SimConfig,
    params:    ModelParams,
    behavior:  B,
    agents:    Option<AgentStore>,
    positions: Option<Vec<Vec2>>,
    groups:    Option<FriendGroups>,
}

impl SimBuilder<PanicBehavior> {
    /// Create a builder running the default panic behavior.
    pub fn new(config: SimConfig, params: ModelParams) -> Self {
        Self {
            config,
            params,
            behavior:  PanicBehavior::default(),
            agents:    None,
            positions: None,
            groups:    None,
        }
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Swap in a different behavior model.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> SimBuilder<B2> {
        SimBuilder {
            config:    self.config,
            params:    self.params,
            behavior,
            agents:    self.agents,
            positions: self.positions,
            groups:    self.groups,
        }
    }

    /// Supply the agent population directly (must hold `params.population`
    /// agents, with every attribute column that long).
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Supply initial positions (must be length `params.population`).
    ///
    /// Positions outside the arena are clamped onto its edge.
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply the friend-group partition instead of drawing one.
    ///
    /// Every agent in `0..params.population` must appear in exactly one
    /// group.
    pub fn groups(mut self, groups: FriendGroups) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Validate inputs, draw whatever was not supplied, place every agent,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.params.validate()?;
        let count = self.params.population;
        let mut rng = SimRng::new(self.config.seed);

        // ── Attributes ────────────────────────────────────────────────────
        let mut agents = match self.agents {
            Some(a) => {
                check_store(count, &a)?;
                a
            }
            None => AgentStoreBuilder::from_params(&self.params).build(&mut rng),
        };

        // ── Placement ─────────────────────────────────────────────────────
        let positions = match self.positions {
            Some(p) => {
                check_len(count, p.len(), "initial positions")?;
                p
            }
            None => (0..count)
                .map(|_| {
                    let x = rng.random::<f64>() * self.params.width;
                    let y = rng.random::<f64>() * self.params.height;
                    Vec2::new(x, y)
                })
                .collect(),
        };
        let mut space =
            ContinuousSpace::new(self.params.width, self.params.height, self.config.torus, count);
        for (i, &pos) in positions.iter().enumerate() {
            space.place(AgentId(i as u32), pos)?;
        }

        // ── Friend groups ─────────────────────────────────────────────────
        let groups = match self.groups {
            Some(g) => {
                let members = g.iter().map(|(_, m)| m.len()).sum::<usize>();
                check_len(count, members, "friend group members")?;
                // Re-indexing rejects duplicates and ids outside `0..count`.
                FriendGroups::from_groups(g.iter().map(|(_, m)| m.to_vec()).collect(), count)?
            }
            None => FriendGroups::partition(
                &(0..count as u32).map(AgentId).collect::<Vec<_>>(),
                self.params.min_group_size,
                self.params.max_group_size,
                &mut rng,
            ),
        };
        agents.assign_groups(&groups);

        tracing::debug!(
            agents = count,
            groups = groups.len(),
            torus = self.config.torus,
            "model initialised"
        );

        Ok(Sim {
            scheduler: RandomActivation::new(count),
            history:   Vec::with_capacity(self.config.total_ticks.min(4_096) as usize),
            tick:      Tick::ZERO,
            config:    self.config,
            params:    self.params,
            rng,
            agents,
            groups,
            space,
            behavior:  self.behavior,
        })
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> SimResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(SimError::AgentCountMismatch { expected, got, what })
    }
}

fn check_store(expected: usize, a: &AgentStore) -> SimResult<()> {
    check_len(expected, a.count, "agent store")?;
    check_len(expected, a.radius.len(), "agent radii")?;
    check_len(expected, a.velocity.len(), "agent velocities")?;
    check_len(expected, a.resilience.len(), "agent resilience")?;
    check_len(expected, a.exposure.len(), "agent exposure")?;
    check_len(expected, a.panic.len(), "agent panic flags")?;
    check_len(expected, a.group.len(), "agent group ids")
}
