use teloxide::prelude::*;
use teloxide::types::User;

use crate::game::OwnerId;

/// Preferred display form for a user we have in hand: `@username` when one
/// exists, the full name otherwise.
pub fn user_display_name(user: &User) -> String {
    match &user.username {
        Some(username) => format!("@{username}"),
        None => user.full_name(),
    }
}

/// Resolves an owner id we only know from the ledger. Works for any user
/// the bot has seen; falls back to `ID <n>` when the lookup fails.
pub async fn resolve_display_name(bot: &Bot, owner: OwnerId) -> String {
    match bot.get_chat(ChatId(owner as i64)).await {
        Ok(chat) => {
            if let Some(username) = chat.username() {
                format!("@{username}")
            } else if let Some(first) = chat.first_name() {
                match chat.last_name() {
                    Some(last) => format!("{first} {last}"),
                    None => first.to_string(),
                }
            } else {
                format!("ID {owner}")
            }
        }
        Err(_) => format!("ID {owner}"),
    }
}

/// "1 answer" / "n answers" for score lines.
pub fn answer_score(count: usize) -> String {
    if count == 1 {
        "1 answer".to_string()
    } else {
        format!("{count} answers")
    }
}
