use thiserror::Error;

use super::OwnerId;

/// Errors produced by the game core. All of these are recovered at the
/// command-handler boundary and turned into a chat reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The ledger already holds the configured maximum number of answers
    #[error("the answer limit of {0} has been reached")]
    CapacityExceeded(usize),

    /// No answer currently carries this number
    #[error("answer #{0} was not found")]
    AnswerNotFound(u32),

    /// The user has no recorded answers
    #[error("user {0} has no recorded answers")]
    OwnerNotFound(OwnerId),

    /// The ticket pool is empty, nothing to draw from
    #[error("the ticket pool is empty")]
    EmptyPool,
}
