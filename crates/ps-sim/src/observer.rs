//! Simulation observer trait for progress reporting and data collection.

use ps_core::Tick;

use crate::{SimView, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_start(&mut self, tick: Tick, stats: &TickStats) {
///         println!("{tick}: {} live, {:.0}% panicked", stats.live_agents, stats.mean_panic * 100.0);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick with the statistics collected
    /// before any agent is activated.
    fn on_tick_start(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`),
    /// right after `on_tick_start`.
    ///
    /// The view shows the state the tick's statistics were computed from.
    fn on_snapshot(&mut self, _tick: Tick, _view: &SimView<'_>) {}

    /// Called at the end of each tick.
    ///
    /// `activated` is the number of agents whose behavior ran this tick.
    fn on_tick_end(&mut self, _tick: Tick, _activated: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
