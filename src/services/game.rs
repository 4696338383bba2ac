use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::warn;

use crate::game::ledger::Ledger;
use crate::storage::StateStore;

/// Serializes every ledger operation per chat: hydrate from the document
/// store, apply the mutation, and flush the document back, all under that
/// chat's lock, so two near-simultaneous submissions can never read the
/// same "next answer number".
pub struct GameService {
    store: StateStore,
    max_answers: Option<usize>,
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl GameService {
    pub fn new(store: StateStore, max_answers: Option<usize>) -> Self {
        Self {
            store,
            max_answers,
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn chat_lock(&self, chat_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(chat_id).or_default().clone()
    }

    /// A load failure hydrates an empty ledger so the game stays playable,
    /// but it is silent data loss and is logged as such.
    async fn hydrate(&self, chat_id: i64) -> Ledger {
        let mut ledger = match self.store.load_ledger(chat_id).await {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(
                    "Falling back to an empty ledger for chat {}: {:#}",
                    chat_id, e
                );
                Ledger::new()
            }
        };
        ledger.set_capacity(self.max_answers);
        ledger
    }

    /// Runs a mutating operation against the chat's ledger and flushes the
    /// result. A save failure returns an error and the mutation is lost,
    /// since the next command hydrates from the document again.
    pub async fn update<F, T>(&self, chat_id: i64, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Ledger) -> T,
    {
        let lock = self.chat_lock(chat_id).await;
        let _guard = lock.lock().await;

        let mut ledger = self.hydrate(chat_id).await;
        let outcome = mutate(&mut ledger);
        self.store.save_ledger(chat_id, &ledger).await?;
        Ok(outcome)
    }

    /// Runs a read-only operation against the chat's ledger. No flush.
    pub async fn read<F, T>(&self, chat_id: i64, inspect: F) -> T
    where
        F: FnOnce(&Ledger) -> T,
    {
        let lock = self.chat_lock(chat_id).await;
        let _guard = lock.lock().await;

        let ledger = self.hydrate(chat_id).await;
        inspect(&ledger)
    }
}
