use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::OwnerId;

/// A single recorded answer. Numbers are assigned densely from 1 and stay
/// dense: deleting an answer renumbers everything above it, so a number is
/// only valid until the next deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub number: u32,
    pub owner: OwnerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One row of the leaderboard: an owner, their score, and their answers in
/// recording order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub owner: OwnerId,
    pub count: usize,
    pub answers: Vec<Answer>,
}

/// The in-memory game state for one chat.
///
/// Three containers are kept in step: `user_answers` maps each owner to
/// their answers, `answer_list` holds every answer in recording order, and
/// `roll_pool` holds one ticket (an answer number) per answer so that the
/// raffle draw is weighted by submission count.
///
/// The serialized form is the persisted document shape:
/// `{"user_answers": {...}, "answer_list": [...], "roll_pool": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    user_answers: BTreeMap<OwnerId, Vec<Answer>>,
    #[serde(default)]
    answer_list: Vec<Answer>,
    #[serde(default)]
    roll_pool: Vec<u32>,
    /// Answer cap; configuration, not state, so it is never persisted.
    #[serde(skip)]
    capacity: Option<usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Re-applies the configured cap after hydration from storage.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
    }

    /// Records an answer for `owner` and returns it. The new answer gets the
    /// next sequence number and one ticket in the roll pool.
    pub fn record(&mut self, owner: OwnerId, text: Option<String>) -> Result<Answer, GameError> {
        if let Some(cap) = self.capacity {
            if self.answer_list.len() >= cap {
                return Err(GameError::CapacityExceeded(cap));
            }
        }

        let number = self.answer_list.len() as u32 + 1;
        let answer = Answer {
            number,
            owner,
            text,
        };

        self.answer_list.push(answer.clone());
        self.roll_pool.push(number);
        self.user_answers.entry(owner).or_default().push(answer.clone());

        Ok(answer)
    }

    /// Deletes answer `number` from all three containers, then renumbers
    /// every answer and ticket above it down by one so numbering stays dense
    /// and contiguous from 1. Returns the removed answer.
    pub fn remove(&mut self, number: u32) -> Result<Answer, GameError> {
        let index = self
            .answer_list
            .iter()
            .position(|a| a.number == number)
            .ok_or(GameError::AnswerNotFound(number))?;
        let removed = self.answer_list.remove(index);

        if let Some(answers) = self.user_answers.get_mut(&removed.owner) {
            answers.retain(|a| a.number != number);
            if answers.is_empty() {
                self.user_answers.remove(&removed.owner);
            }
        }

        // One ticket per answer; drop a single occurrence.
        if let Some(pos) = self.roll_pool.iter().position(|&t| t == number) {
            self.roll_pool.remove(pos);
        }

        for answer in &mut self.answer_list {
            if answer.number > number {
                answer.number -= 1;
            }
        }
        for answers in self.user_answers.values_mut() {
            for answer in answers.iter_mut() {
                if answer.number > number {
                    answer.number -= 1;
                }
            }
        }
        for ticket in &mut self.roll_pool {
            if *ticket > number {
                *ticket -= 1;
            }
        }

        Ok(removed)
    }

    /// Removes an owner from the draw: all of their tickets leave the roll
    /// pool and their entry leaves `user_answers`. Their rows in
    /// `answer_list` stay and nothing is renumbered; the historical record
    /// (and the capacity accounting) is deliberately untouched.
    /// Returns how many tickets were removed.
    pub fn exclude_owner(&mut self, owner: OwnerId) -> Result<usize, GameError> {
        let answers = self
            .user_answers
            .remove(&owner)
            .ok_or(GameError::OwnerNotFound(owner))?;

        let before = self.roll_pool.len();
        self.roll_pool
            .retain(|ticket| !answers.iter().any(|a| a.number == *ticket));

        Ok(before - self.roll_pool.len())
    }

    /// Empties all three containers. Never fails.
    pub fn clear(&mut self) {
        self.user_answers.clear();
        self.answer_list.clear();
        self.roll_pool.clear();
    }

    /// Leaderboard over `user_answers`, so excluded owners do not appear.
    /// Sorted by descending answer count; ties go to the owner whose first
    /// answer has the lowest current number.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .user_answers
            .iter()
            .map(|(&owner, answers)| LeaderboardEntry {
                owner,
                count: answers.len(),
                answers: answers.clone(),
            })
            .collect();

        entries.sort_by_key(|e| {
            let first = e.answers.iter().map(|a| a.number).min().unwrap_or(u32::MAX);
            (std::cmp::Reverse(e.count), first)
        });

        entries
    }

    /// The owner holding answer `number`, if any owner still holds it.
    /// Excluded owners' numbers resolve to `None` even though their rows
    /// remain in `answer_list`.
    pub fn owner_of(&self, number: u32) -> Option<OwnerId> {
        self.user_answers
            .iter()
            .find(|(_, answers)| answers.iter().any(|a| a.number == number))
            .map(|(&owner, _)| owner)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answer_list
    }

    pub fn roll_pool(&self) -> &[u32] {
        &self.roll_pool
    }

    pub fn answer_count(&self) -> usize {
        self.answer_list.len()
    }

    pub fn count_for(&self, owner: OwnerId) -> usize {
        self.user_answers.get(&owner).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.answer_list.is_empty()
    }
}
