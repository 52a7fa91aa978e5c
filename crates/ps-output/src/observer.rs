//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ps_core::{AgentId, Tick};
use ps_sim::{SimObserver, SimView, TickStats};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick summaries and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Summaries are written every tick; snapshots cover every agent ever
/// created, with an empty position for those that have left.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:        tick.0,
            mean_panic:  stats.mean_panic,
            live_agents: stats.live_agents as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, view: &SimView<'_>) {
        let agents = view.agents;
        let rows: Vec<AgentSnapshotRow> = (0..agents.count)
            .map(|i| {
                let pos = view.space.position(AgentId(i as u32));
                AgentSnapshotRow {
                    agent_id: i as u32,
                    tick:     tick.0,
                    group:    agents.group[i].0,
                    panic:    agents.panic[i],
                    exposure: agents.exposure[i],
                    x:        pos.map(|p| p.x),
                    y:        pos.map(|p| p.y),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
