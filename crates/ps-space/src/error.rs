//! Space error type.

use thiserror::Error;

use ps_core::AgentId;

/// Errors produced by `ps-space`.
#[derive(Debug, Error, PartialEq)]
pub enum SpaceError {
    #[error("{0} has not been placed in the space")]
    NotPlaced(AgentId),

    #[error("non-finite position ({x}, {y}) for {agent}")]
    NonFinite { agent: AgentId, x: f64, y: f64 },
}

pub type SpaceResult<T> = Result<T, SpaceError>;
