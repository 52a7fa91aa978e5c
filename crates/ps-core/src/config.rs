//! Model parameters and run configuration.
//!
//! `ModelParams` describes the crowd (population, arena, group sizes, agent
//! attribute bounds); `SimConfig` describes the run (length, seed, output
//! cadence).  Both are typically filled in by the application crate from a
//! JSON file and CLI flags, then handed to `ps_sim::SimBuilder`.

use crate::{CoreError, CoreResult};

// ── ModelParams ───────────────────────────────────────────────────────────────

/// Construction parameters for one crowd model.
///
/// Defaults match the reference interactive setup: 100 agents in a 10 × 10
/// arena, friend groups of 1–5, resilience 3, minimum radius 0.5.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Number of agents created at initialization.
    pub population: usize,

    /// Arena width; x coordinates live in `[0, width]`.
    pub width: f64,

    /// Arena height; y coordinates live in `[0, height]`.
    pub height: f64,

    /// Smallest friend-group size drawn by the partitioner (inclusive).
    pub min_group_size: usize,

    /// Largest friend-group size drawn by the partitioner (inclusive).
    pub max_group_size: usize,

    /// Exposure must exceed this to trigger panic.
    pub resilience: u32,

    /// Agent radii are drawn from `[min_radius, min_radius + 0.2)`.
    pub min_radius: f64,

    /// Agent velocities are drawn from `[min_velocity, min_velocity + 0.2)`.
    pub min_velocity: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            population:     100,
            width:          10.0,
            height:         10.0,
            min_group_size: 1,
            max_group_size: 5,
            resilience:     3,
            min_radius:     0.5,
            min_velocity:   0.1,
        }
    }
}

impl ModelParams {
    /// Reject parameter sets the model cannot run with.
    ///
    /// Nothing is clamped here; clamping only happens where the model
    /// defines it (positions, last group size).
    pub fn validate(&self) -> CoreResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(CoreError::InvalidDimensions {
                width:  self.width,
                height: self.height,
            });
        }
        if self.min_group_size == 0 || self.min_group_size > self.max_group_size {
            return Err(CoreError::InvalidGroupSizes {
                min: self.min_group_size,
                max: self.max_group_size,
            });
        }
        if !positive(self.min_radius) {
            return Err(CoreError::InvalidRadius(self.min_radius));
        }
        if !positive(self.min_velocity) {
            return Err(CoreError::InvalidVelocity(self.min_velocity));
        }
        if u32::try_from(self.population).is_err() {
            return Err(CoreError::Config(format!(
                "population {} exceeds the agent id range",
                self.population
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a per-agent snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Measure neighbor distances with wraparound.  Movement is clamped to
    /// the arena either way.
    pub torus: bool,

    /// End `run` early once every agent has left through the exit.
    pub stop_when_evacuated: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             200,
            seed:                    42,
            snapshot_interval_ticks: 1,
            torus:                   true,
            stop_when_evacuated:     false,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.total_ticks)
    }
}
