//! `ps-space` — the arena agents move through.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`space`]   | `ContinuousSpace` (position store + R-tree index)           |
//! | [`error`]   | `SpaceError`, `SpaceResult<T>`                              |
//!
//! # Topology
//!
//! The arena is `[0, width] × [0, height]`.  Moves are clamped to that
//! rectangle; they never wrap.  With `torus = true` the *neighbor query*
//! measures distance with wraparound, so agents pressed against opposite
//! walls can see each other.

pub mod error;
pub mod space;


pub use error::{SpaceError, SpaceResult};
pub use space::ContinuousSpace;
