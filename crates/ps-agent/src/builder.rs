//! Fluent builder that samples a randomized agent population.
//!
//! # Usage
//!
//! ```rust
//! use ps_agent::AgentStoreBuilder;
//! use ps_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(1_000)
//!     .resilience(3)
//!     .min_radius(0.5)
//!     .build(&mut rng);
//!
//! assert_eq!(store.count, 1_000);
//! assert!(store.radius.iter().all(|r| (0.5..0.7).contains(r)));
//! ```

use ps_core::{ModelParams, SimRng};

use crate::AgentStore;

/// Width of the uniform band above the minimum radius / velocity.
const ATTRIBUTE_SPREAD: f64 = 0.2;

/// Fluent builder for [`AgentStore`].
pub struct AgentStoreBuilder {
    count:        usize,
    resilience:   u32,
    min_radius:   f64,
    min_velocity: f64,
}

impl AgentStoreBuilder {
    /// Builder for `count` agents with the default attribute bounds.
    pub fn new(count: usize) -> Self {
        let defaults = ModelParams::default();
        Self {
            count,
            resilience:   defaults.resilience,
            min_radius:   defaults.min_radius,
            min_velocity: defaults.min_velocity,
        }
    }

    /// Builder pre-filled from validated model parameters.
    pub fn from_params(params: &ModelParams) -> Self {
        Self {
            count:        params.population,
            resilience:   params.resilience,
            min_radius:   params.min_radius,
            min_velocity: params.min_velocity,
        }
    }

    pub fn resilience(mut self, resilience: u32) -> Self {
        self.resilience = resilience;
        self
    }

    pub fn min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    pub fn min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    /// Sample every agent's radius and velocity from `rng`.
    ///
    /// Draws happen in agent order, radius before velocity, so a given seed
    /// always yields the same population.
    pub fn build(self, rng: &mut SimRng) -> AgentStore {
        let mut store = AgentStore::uniform(self.count, self.min_radius, self.min_velocity, self.resilience);
        for i in 0..self.count {
            store.radius[i] = self.min_radius + rng.random::<f64>() * ATTRIBUTE_SPREAD;
            store.velocity[i] = self.min_velocity + rng.random::<f64>() * ATTRIBUTE_SPREAD;
        }
        store
    }
}
