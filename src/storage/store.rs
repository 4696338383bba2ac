use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::game::access::AccessGuard;
use crate::game::ledger::Ledger;
use crate::game::OwnerId;

/// Whole-document JSON persistence for game state and the whitelist.
///
/// The contract is the one the bot has always had: read the whole document,
/// deserialize, mutate in memory, serialize, overwrite the whole document.
/// There are no partial updates and the last writer wins.
#[derive(Clone)]
pub struct StateStore {
    data_dir: PathBuf,
}

impl StateStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates the data directory if it does not exist yet.
    pub async fn init(&self) -> Result<()> {
        if !self.data_dir.exists() {
            info!("Creating data directory {}", self.data_dir.display());
        }
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| format!("failed to create {}", self.data_dir.display()))?;
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// One game document per chat; the `default` game slot is the only one
    /// in use, the name keeps room for parallel games per chat.
    fn game_path(&self, chat_id: i64) -> PathBuf {
        self.data_dir
            .join(format!("answers_chat_{chat_id}_game_default.json"))
    }

    fn whitelist_path(&self) -> PathBuf {
        self.data_dir.join("whitelist.json")
    }

    /// Loads the ledger for a chat. A missing document is a normal first
    /// run and yields an empty ledger; anything else (unreadable file,
    /// corrupt JSON) is an error the caller downgrades to an empty ledger
    /// with a warning.
    pub async fn load_ledger(&self, chat_id: i64) -> Result<Ledger> {
        let path = self.game_path(chat_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt game document {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Ledger::new()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    pub async fn save_ledger(&self, chat_id: i64, ledger: &Ledger) -> Result<()> {
        let path = self.game_path(chat_id);
        let bytes = serde_json::to_vec_pretty(ledger).context("failed to serialize ledger")?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Loads the whitelist, seeding it with the admin id on first run.
    pub async fn load_guard(&self, admin_seed: OwnerId) -> Result<AccessGuard> {
        let path = self.whitelist_path();
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt whitelist document {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(AccessGuard::seeded(admin_seed))
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    pub async fn save_guard(&self, guard: &AccessGuard) -> Result<()> {
        let path = self.whitelist_path();
        let bytes = serde_json::to_vec(guard).context("failed to serialize whitelist")?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
