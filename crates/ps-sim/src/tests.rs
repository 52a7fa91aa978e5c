//! Integration tests for ps-sim.

use ps_agent::{AgentError, AgentStore, FriendGroups};
use ps_behavior::{BehaviorModel, Intent, NoopBehavior, PanicBehavior, StepContext};
use ps_core::{AgentId, ModelParams, SimConfig, SimRng, Tick, Vec2};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimView, TickStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params(population: usize) -> ModelParams {
    ModelParams { population, ..ModelParams::default() }
}

fn config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, ..SimConfig::default() }
}

fn singletons(n: u32) -> FriendGroups {
    FriendGroups::from_groups((0..n).map(|i| vec![AgentId(i)]).collect(), n as usize).unwrap()
}

fn pts(v: &[(f64, f64)]) -> Vec<Vec2> {
    v.iter().map(|&p| p.into()).collect()
}

/// Runs the panic rule but never moves or leaves, so a crowd stays put.
struct Anchored(PanicBehavior);

impl BehaviorModel for Anchored {
    fn step(&self, agent: AgentId, ctx: &StepContext<'_>) -> Vec<Intent> {
        self.0
            .step(agent, ctx)
            .into_iter()
            .filter(|i| !matches!(i, Intent::MoveTo(_) | Intent::Exit))
            .collect()
    }
}

/// Records everything the loop reports.
#[derive(Default)]
struct Recorder {
    starts:    Vec<TickStats>,
    activated: Vec<usize>,
    snapshots: Vec<Tick>,
    panic:     Vec<Vec<bool>>,
    live:      Vec<Vec<AgentId>>,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick, stats: &TickStats) {
        self.starts.push(*stats);
    }

    fn on_snapshot(&mut self, tick: Tick, view: &SimView<'_>) {
        self.snapshots.push(tick);
        self.panic.push(view.agents.panic.clone());
        self.live.push(view.live_agents().map(|a| a.id).collect());
    }

    fn on_tick_end(&mut self, _tick: Tick, activated: usize) {
        self.activated.push(activated);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(config(10), ModelParams::default()).build().unwrap();
        assert_eq!(sim.agents().count, 100);
        assert_eq!(sim.space().len(), 100);
        assert_eq!(sim.live_count(), 100);
        assert!(sim.history().is_empty());
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }

    #[test]
    fn every_agent_grouped() {
        let sim = SimBuilder::new(config(1), ModelParams::default()).build().unwrap();
        let members: usize = sim.groups().iter().map(|(_, m)| m.len()).sum();
        assert_eq!(members, 100);
        for (i, &g) in sim.agents().group.iter().enumerate() {
            assert_eq!(g, sim.groups().group_of(AgentId(i as u32)));
        }
    }

    #[test]
    fn attributes_within_bounds() {
        let sim = SimBuilder::new(config(1), ModelParams::default()).build().unwrap();
        assert!(sim.agents().radius.iter().all(|r| (0.5..0.7).contains(r)));
        assert!(sim.agents().velocity.iter().all(|v| (0.1..0.3).contains(v)));
        assert!(sim.agents().resilience.iter().all(|&r| r == 3));
    }

    #[test]
    fn invalid_params_rejected() {
        let bad = ModelParams { min_group_size: 4, max_group_size: 2, ..ModelParams::default() };
        let result = SimBuilder::new(config(1), bad).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(config(1), params(3))
            .positions(pts(&[(1.0, 1.0), (2.0, 2.0)]))
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn group_count_mismatch_errors() {
        let result = SimBuilder::new(config(1), params(3)).groups(singletons(2)).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { .. })));
    }

    #[test]
    fn groups_outside_population_rejected() {
        let stray = FriendGroups::partition(&[AgentId(5), AgentId(6)], 1, 2, &mut SimRng::new(1));
        let result = SimBuilder::new(config(1), params(2)).groups(stray).build();
        assert!(matches!(result, Err(SimError::Agent(AgentError::UnknownAgent(_)))));
    }

    #[test]
    fn repeated_group_member_rejected() {
        let doubled = FriendGroups::partition(&[AgentId(0), AgentId(0)], 2, 2, &mut SimRng::new(1));
        let result = SimBuilder::new(config(1), params(2)).groups(doubled).build();
        assert!(matches!(
            result,
            Err(SimError::Agent(AgentError::DuplicateMember(AgentId(0))))
        ));
    }

    #[test]
    fn supplied_groups_assigned_to_agents() {
        let groups = FriendGroups::from_groups(vec![vec![AgentId(1)], vec![AgentId(0), AgentId(2)]], 3).unwrap();
        let sim = SimBuilder::new(config(1), params(3)).groups(groups).build().unwrap();
        let g = &sim.agents().group;
        assert_eq!(g[0], g[2]);
        assert_ne!(g[0], g[1]);
        assert!(sim.groups().are_friends(AgentId(0), AgentId(2)));
    }

    #[test]
    fn agent_store_count_mismatch_errors() {
        let result = SimBuilder::new(config(1), params(3))
            .agents(AgentStore::uniform(2, 0.5, 0.1, 3))
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 2, what: "agent store" })
        ));
    }

    #[test]
    fn short_attribute_column_rejected() {
        let mut store = AgentStore::uniform(3, 0.5, 0.1, 3);
        store.radius.truncate(2);
        let result = SimBuilder::new(config(1), params(3)).agents(store).build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 2, what: "agent radii" })
        ));

        let mut store = AgentStore::uniform(3, 0.5, 0.1, 3);
        store.exposure.pop();
        let result = SimBuilder::new(config(1), params(3)).agents(store).build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { what: "agent exposure", .. })
        ));
    }

    #[test]
    fn initial_positions_clamped() {
        let sim = SimBuilder::new(config(1), params(2))
            .positions(pts(&[(-1.0, 12.0), (4.0, 5.0)]))
            .build()
            .unwrap();
        assert_eq!(sim.space().position(AgentId(0)), Some(Vec2::new(0.0, 10.0)));
        assert_eq!(sim.space().position(AgentId(1)), Some(Vec2::new(4.0, 5.0)));
    }

    #[test]
    fn same_seed_same_world() {
        let a = SimBuilder::new(config(1), params(30)).build().unwrap();
        let b = SimBuilder::new(config(1), params(30)).build().unwrap();
        assert_eq!(a.agents().radius, b.agents().radius);
        assert_eq!(a.agents().group, b.agents().group);
        for i in 0..30 {
            assert_eq!(a.space().position(AgentId(i)), b.space().position(AgentId(i)));
        }
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use super::*;

    #[test]
    fn history_collected_before_activation() {
        let mut sim = SimBuilder::new(config(5), params(2))
            .positions(pts(&[(0.1, 0.1), (9.0, 9.0)]))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let h = sim.history();
        assert_eq!(h.len(), 5);
        assert_eq!(h[0].tick, Tick(0));
        assert_eq!(h[0].live_agents, 2);
        assert_eq!(h[1].live_agents, 1);
    }

    #[test]
    fn near_exit_agent_removed_on_first_step() {
        let mut sim = SimBuilder::new(config(10), params(2))
            .positions(pts(&[(0.1, 0.1), (9.0, 9.0)]))
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.space().position(AgentId(0)), None);
        assert!(!sim.scheduler().is_live(AgentId(0)));
        assert_eq!(sim.live_count(), 1);
        assert!(sim.live_agents().all(|a| a.id == AgentId(1)));
    }

    #[test]
    fn corner_agent_leaves_in_wide_arena() {
        let arena = ModelParams { population: 3, width: 20.0, height: 20.0, ..ModelParams::default() };
        let mut sim = SimBuilder::new(config(10), arena)
            .agents(AgentStore::uniform(3, 0.3, 0.1, 3))
            .positions(pts(&[(0.05, 0.0), (10.0, 10.0), (19.9, 19.9)]))
            .groups(singletons(3))
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.space().position(AgentId(0)), None);
        assert!(!sim.scheduler().is_live(AgentId(0)));
        assert_eq!(sim.live_count(), 2);
        assert!(sim.space().position(AgentId(1)).is_some());
        assert!(sim.space().position(AgentId(2)).is_some());
    }

    #[test]
    fn removed_agents_never_return() {
        let mut rec = Recorder::default();
        let mut sim = SimBuilder::new(config(80), ModelParams::default()).build().unwrap();
        sim.run(&mut rec).unwrap();

        for w in rec.live.windows(2) {
            assert!(w[1].iter().all(|a| w[0].contains(a)), "live set grew");
        }
        for i in 0..100 {
            let id = AgentId(i);
            if !sim.scheduler().is_live(id) {
                assert_eq!(sim.space().position(id), None);
            }
        }
    }

    #[test]
    fn panic_never_resets() {
        let mut rec = Recorder::default();
        let dense = ModelParams { population: 150, width: 5.0, height: 5.0, resilience: 1, ..ModelParams::default() };
        let mut sim = SimBuilder::new(config(40), dense).build().unwrap();
        sim.run(&mut rec).unwrap();

        for w in rec.panic.windows(2) {
            for (before, after) in w[0].iter().zip(&w[1]) {
                assert!(!before | after, "panic flag was cleared");
            }
        }
    }

    #[test]
    fn positions_stay_in_arena() {
        let mut sim = SimBuilder::new(config(30), ModelParams::default()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        for a in sim.live_agents() {
            assert!((0.0..=10.0).contains(&a.position.x));
            assert!((0.0..=10.0).contains(&a.position.y));
        }
    }

    #[test]
    fn every_live_agent_activated_once() {
        let mut rec = Recorder::default();
        let mut sim = SimBuilder::new(config(50), ModelParams::default()).build().unwrap();
        sim.run(&mut rec).unwrap();
        for (stats, &n) in rec.starts.iter().zip(&rec.activated) {
            assert_eq!(stats.live_agents, n);
        }
    }

    #[test]
    fn isolated_friends_stay_calm() {
        let mut sim = SimBuilder::new(config(10), params(2))
            .positions(pts(&[(8.0, 8.0), (8.3, 8.0)]))
            .groups(FriendGroups::from_groups(vec![vec![AgentId(0), AgentId(1)]], 2).unwrap())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert!(sim.agents().exposure.iter().all(|&e| e == 0));
        assert!(sim.agents().panic.iter().all(|&p| !p));
        assert!(sim.history().iter().all(|s| s.mean_panic == 0.0));
    }

    #[test]
    fn crowded_agents_panic_after_resilience_exceeded() {
        let crowd = ModelParams { population: 3, resilience: 2, ..ModelParams::default() };
        let mut sim = SimBuilder::new(config(4), crowd)
            .behavior(Anchored(PanicBehavior::default()))
            .positions(pts(&[(5.0, 5.0), (5.2, 5.0), (5.0, 5.2)]))
            .groups(singletons(3))
            .build()
            .unwrap();

        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert!(sim.agents().panic.iter().all(|&p| !p));
        assert_eq!(sim.agents().exposure, vec![2, 2, 2]);

        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert!(sim.agents().panic.iter().all(|&p| p));
        assert_eq!(sim.history()[2].mean_panic, 0.0);
        assert_eq!(sim.history()[3].mean_panic, 1.0);
    }

    #[test]
    fn single_stranger_keeps_exposure_at_zero() {
        let mut sim = SimBuilder::new(config(5), params(2))
            .behavior(Anchored(PanicBehavior::default()))
            .positions(pts(&[(5.0, 5.0), (5.2, 5.0)]))
            .groups(singletons(2))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agents().exposure, vec![0, 0]);
    }

    #[test]
    fn noop_behavior_keeps_everyone() {
        let mut sim = SimBuilder::new(config(5), params(10)).behavior(NoopBehavior).build().unwrap();
        let before: Vec<_> = sim.live_agents().collect();
        sim.run(&mut NoopObserver).unwrap();
        let after: Vec<_> = sim.live_agents().collect();
        assert_eq!(before, after);
    }
}

// ── Run control & observers ───────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn stops_early_when_evacuated() {
        let cfg = SimConfig { stop_when_evacuated: true, ..config(50) };
        let mut sim = SimBuilder::new(cfg, params(1)).positions(pts(&[(0.1, 0.1)])).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.current_tick(), Tick(1));
        assert_eq!(rec.ended, Some(Tick(1)));
    }

    #[test]
    fn keeps_ticking_without_early_stop() {
        let mut sim = SimBuilder::new(config(6), params(1)).positions(pts(&[(0.1, 0.1)])).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let h = sim.history();
        assert_eq!(h.len(), 6);
        assert!(h[1..].iter().all(|s| s.live_agents == 0 && s.mean_panic == 0.0));
    }

    #[test]
    fn snapshot_interval_respected() {
        let cfg = SimConfig { snapshot_interval_ticks: 2, ..config(5) };
        let mut sim = SimBuilder::new(cfg, params(5)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert_eq!(rec.starts.len(), 5);
        assert_eq!(rec.activated.len(), 5);
        assert_eq!(rec.ended, Some(Tick(5)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let cfg = SimConfig { snapshot_interval_ticks: 0, ..config(3) };
        let mut sim = SimBuilder::new(cfg, params(5)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn run_ticks_ignores_end_tick() {
        let mut sim = SimBuilder::new(config(2), params(5)).build().unwrap();
        sim.run_ticks(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick(), Tick(4));
        assert_eq!(sim.history().len(), 4);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = SimBuilder::new(config(40), ModelParams::default()).build().unwrap();
            sim.run(&mut NoopObserver).unwrap();
            (sim.history().to_vec(), sim.live_agents().collect::<Vec<_>>())
        };
        assert_eq!(run(), run());
    }
}
