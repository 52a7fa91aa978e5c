//! `ps-behavior` — agent behavior model trait and intent types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`SetExposure`, `Panic`, `MoveTo`, `Exit`)        |
//! | [`context`] | `StepContext<'a>` — read-only view handed to one agent's turn   |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`steering`]| `PanicBehavior` — exit/friend/stranger steering + panic latch   |
//! | [`noop`]    | `NoopBehavior` — placeholder that never produces intents        |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Each agent turn is split in two:
//!
//! 1. **Decide**: `BehaviorModel::step` reads the world through
//!    `&StepContext` and returns a list of intents.  No mutation.
//!
//! 2. **Apply**: ps-sim consumes the intents immediately, in order, mutating
//!    `AgentStore`, `ContinuousSpace` and the scheduler before the next
//!    agent's turn begins.
//!
//! Because apply runs between turns, later agents in a tick see the moves
//! and exits of earlier ones.

pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod steering;


pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use steering::{PanicBehavior, SteeringWeights};
