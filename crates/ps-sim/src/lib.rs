//! `ps-sim` — tick loop driver for the panic_sim crowd model.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Collect   — TickStats { mean_panic, live_agents } over the live set,
//!                 appended to `history` BEFORE anyone moves.
//!   ② Snapshot  — every `snapshot_interval_ticks`, hand observers a SimView.
//!   ③ Activate  — shuffle the live set; for each agent still live:
//!                   BehaviorModel::step → intents, applied immediately:
//!                   SetExposure(e)  → store exposure
//!                   Panic           → latch panic
//!                   MoveTo(p)       → space.move_agent (clamped)
//!                   Exit            → leave space and schedule
//! ```
//!
//! Updates are sequential and order-dependent: an agent activated later in
//! a tick sees the moves and exits of those before it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ps_core::{ModelParams, SimConfig};
//! use ps_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), ModelParams::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.history().last());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use view::{AgentView, SimView, TickStats};
