//! `ps-agent` — Structure-of-Arrays agent storage for the `panic_sim` model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays of attributes and panic state)   |
//! | [`builder`]     | `AgentStoreBuilder` (randomized attribute sampling)       |
//! | [`groups`]      | `FriendGroups` arena and the random partitioner           |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! Positions are not stored here: the space owns them.  An agent is "live"
//! exactly while the space holds a position for it.

pub mod builder;
pub mod error;
pub mod groups;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use groups::FriendGroups;
pub use store::AgentStore;
