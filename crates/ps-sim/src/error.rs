use ps_agent::AgentError;
use ps_core::CoreError;
use ps_space::SpaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid model parameters: {0}")]
    Core(#[from] CoreError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("invalid friend groups: {0}")]
    Agent(#[from] AgentError),

    #[error("space error: {0}")]
    Space(#[from] SpaceError),
}

pub type SimResult<T> = Result<T, SimError>;
