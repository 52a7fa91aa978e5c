use thiserror::Error;

use ps_core::AgentId;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("{0} appears in more than one friend group")]
    DuplicateMember(AgentId),

    #[error("{0} is not a member of any friend group")]
    Unassigned(AgentId),

    #[error("{0} is outside the population")]
    UnknownAgent(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
