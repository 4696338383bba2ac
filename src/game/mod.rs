/// Whitelist of users allowed to run mutating commands
pub mod access;
/// Typed errors shared by the game core
pub mod error;
/// Answer ledger: numbering, scores, and the ticket pool
pub mod ledger;
/// Weighted winner selection over the ticket pool
pub mod raffle;

/// Telegram user id. The core never talks to the transport, so this stays a
/// plain integer rather than a `teloxide` type.
pub type OwnerId = u64;
