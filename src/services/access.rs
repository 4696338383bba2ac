use anyhow::Result;
use tokio::sync::RwLock;
use tracing::warn;

use crate::game::access::AccessGuard;
use crate::game::OwnerId;

use crate::storage::StateStore;

/// Process-wide whitelist, hydrated once at startup and persisted after
/// every mutation.
pub struct AccessService {
    store: StateStore,
    guard: RwLock<AccessGuard>,
}

impl AccessService {
    pub async fn load(store: StateStore, admin_seed: OwnerId) -> Self {
        let guard = match store.load_guard(admin_seed).await {
            Ok(guard) => guard,
            Err(e) => {
                warn!(
                    "Falling back to the seeded whitelist (admin {}): {:#}",
                    admin_seed, e
                );
                AccessGuard::seeded(admin_seed)
            }
        };
        Self {
            store,
            guard: RwLock::new(guard),
        }
    }

    pub async fn is_authorized(&self, id: OwnerId) -> bool {
        self.guard.read().await.is_authorized(id)
    }

    /// Adds an id and persists the list. Returns whether the id was new.
    pub async fn add(&self, id: OwnerId) -> Result<bool> {
        let mut guard = self.guard.write().await;
        let added = guard.add(id);
        self.store.save_guard(&guard).await?;
        Ok(added)
    }

    /// Removes an id and persists the list. Removing a non-member is a
    /// no-op, not an error.
    pub async fn remove(&self, id: OwnerId) -> Result<bool> {
        let mut guard = self.guard.write().await;
        let removed = guard.remove(id);
        self.store.save_guard(&guard).await?;
        Ok(removed)
    }
}
