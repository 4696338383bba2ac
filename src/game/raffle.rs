use rand::seq::SliceRandom;
use rand::Rng;

use super::error::GameError;
use super::ledger::Ledger;
use super::OwnerId;

/// Draws one ticket uniformly from the roll pool and returns the answer
/// number on it. Each answer contributes one ticket, so a user with three
/// answers is three times as likely to win as a user with one.
pub fn draw<R: Rng + ?Sized>(ledger: &Ledger, rng: &mut R) -> Result<u32, GameError> {
    ledger
        .roll_pool()
        .choose(rng)
        .copied()
        .ok_or(GameError::EmptyPool)
}

/// Resolves the drawn number back to its owner. Fails when no owner holds
/// the number any more (e.g. the owner was excluded after the pool was
/// built); callers treat that as "no winner determined", not as a crash.
pub fn resolve_owner(ledger: &Ledger, number: u32) -> Result<OwnerId, GameError> {
    ledger
        .owner_of(number)
        .ok_or(GameError::AnswerNotFound(number))
}
