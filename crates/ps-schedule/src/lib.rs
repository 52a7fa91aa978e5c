//! `ps-schedule` — per-tick agent activation.
//!
//! # Crate layout
//!
//! | Module           | Contents                                          |
//! |------------------|---------------------------------------------------|
//! | [`activation`]   | `RandomActivation` — live set + shuffled order    |
//!
//! # Removal during a tick
//!
//! The activation order for a tick is a snapshot `Vec<AgentId>`.  Agents
//! that leave mid-tick are dropped from the live set, not from the snapshot;
//! the driver checks [`RandomActivation::is_live`] before activating each id.

pub mod activation;


pub use activation::RandomActivation;
