//! `ps-core` — foundational types for the `panic_sim` crowd evacuation model.
//!
//! This crate is a dependency of every other `ps-*` crate.  It has no `ps-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `GroupId`                                  |
//! | [`geo`]         | `Vec2`, `distance`, `normalized_heading`              |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `ModelParams`, `SimConfig`                            |
//! | [`rng`]         | `SimRng` (the single simulation random source)        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Vec2` and config.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModelParams, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{HEADING_EPSILON, Vec2, distance, normalized_heading};
pub use ids::{AgentId, GroupId};
pub use rng::SimRng;
pub use time::Tick;
