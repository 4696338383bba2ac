pub mod commands;
pub mod handlers;

use std::sync::Arc;

use teloxide::types::ChatId;

use crate::services::access::AccessService;
use crate::services::broadcast::BroadcastStates;
use crate::services::game::GameService;

/// Everything a command handler needs, wired up once in `main` and cloned
/// into the dispatch tree. Replaces the module-level globals of the
/// original bot.
#[derive(Clone)]
pub struct AppContext {
    pub games: Arc<GameService>,
    pub access: Arc<AccessService>,
    pub broadcasts: Arc<BroadcastStates>,
    pub broadcast_chat: Option<ChatId>,
}
