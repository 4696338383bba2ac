use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::game::OwnerId;

/// A chat that has asked for an announcement and is waiting for the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBroadcast {
    pub requester: OwnerId,
    pub requested_at: DateTime<Utc>,
}

/// Per-chat two-state machine for the announcement handoff: a chat is
/// either idle (absent from the map) or awaiting the announcement text
/// from the user who armed it. Pending entries expire after `timeout`.
pub struct BroadcastStates {
    timeout: Duration,
    pending: Mutex<HashMap<i64, PendingBroadcast>>,
}

impl BroadcastStates {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::seconds(timeout_secs as i64),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Arms the chat; re-arming replaces the previous request.
    pub async fn begin(&self, chat_id: i64, requester: OwnerId) {
        self.begin_at(chat_id, requester, Utc::now()).await;
    }

    pub async fn begin_at(&self, chat_id: i64, requester: OwnerId, now: DateTime<Utc>) {
        let mut pending = self.pending.lock().await;
        pending.insert(
            chat_id,
            PendingBroadcast {
                requester,
                requested_at: now,
            },
        );
    }

    /// Consumes the pending state if `from` is the user who armed it and it
    /// has not expired; an expired entry is dropped on the spot. Messages
    /// from anyone else leave the state untouched.
    pub async fn take_if_pending(&self, chat_id: i64, from: OwnerId) -> Option<PendingBroadcast> {
        self.take_if_pending_at(chat_id, from, Utc::now()).await
    }

    pub async fn take_if_pending_at(
        &self,
        chat_id: i64,
        from: OwnerId,
        now: DateTime<Utc>,
    ) -> Option<PendingBroadcast> {
        let mut pending = self.pending.lock().await;
        let entry = pending.get(&chat_id)?;

        if now - entry.requested_at > self.timeout {
            pending.remove(&chat_id);
            return None;
        }
        if entry.requester != from {
            return None;
        }
        pending.remove(&chat_id)
    }

    pub async fn is_pending(&self, chat_id: i64) -> bool {
        self.pending.lock().await.contains_key(&chat_id)
    }

    /// Drops every expired entry and returns them so the sweeper can tell
    /// the requesting chats their request timed out.
    pub async fn sweep_expired(&self) -> Vec<(i64, PendingBroadcast)> {
        self.sweep_expired_at(Utc::now()).await
    }

    pub async fn sweep_expired_at(&self, now: DateTime<Utc>) -> Vec<(i64, PendingBroadcast)> {
        let mut pending = self.pending.lock().await;
        let expired: Vec<i64> = pending
            .iter()
            .filter(|(_, p)| now - p.requested_at > self.timeout)
            .map(|(&chat_id, _)| chat_id)
            .collect();

        expired
            .into_iter()
            .filter_map(|chat_id| pending.remove(&chat_id).map(|p| (chat_id, p)))
            .collect()
    }
}
