use std::collections::HashMap;

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::AppContext;
use crate::game::ledger::LeaderboardEntry;
use crate::game::OwnerId;
use crate::utils::display::{answer_score, resolve_display_name};
use crate::utils::markdown::escape_markdown;

pub async fn handle_leaderboard(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let board = ctx.games.read(chat_id.0, |ledger| ledger.leaderboard()).await;

    if board.is_empty() {
        bot.send_message(chat_id, "🏆 The leaderboard is empty.")
            .await?;
        return Ok(());
    }

    let text = format_leaderboard(&bot, &board).await;
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Markdown)
        .await?;

    Ok(())
}

/// Two sections, the way the bot has always rendered them: every answer in
/// number order with its owner and text, then the per-user score summary.
async fn format_leaderboard(bot: &Bot, board: &[LeaderboardEntry]) -> String {
    let mut names: HashMap<OwnerId, String> = HashMap::new();
    for entry in board {
        let name = resolve_display_name(bot, entry.owner).await;
        names.insert(entry.owner, escape_markdown(&name));
    }

    let fallback = String::new();

    let mut rows: Vec<(u32, &str, Option<&str>)> = board
        .iter()
        .flat_map(|entry| {
            let name = names.get(&entry.owner).unwrap_or(&fallback);
            entry
                .answers
                .iter()
                .map(move |answer| (answer.number, name.as_str(), answer.text.as_deref()))
        })
        .collect();
    rows.sort_by_key(|(number, _, _)| *number);

    let mut text = String::from("🏆 *Leaderboard* 🏆\n\n");
    for (number, name, answer_text) in rows {
        match answer_text {
            Some(answer_text) => {
                text.push_str(&format!(
                    "{number}. {name} - {}\n",
                    escape_markdown(answer_text)
                ));
            }
            None => {
                text.push_str(&format!("{number}. {name}\n"));
            }
        }
    }

    text.push_str("\n📊 *Score summary:*\n");
    for entry in board {
        let name = names.get(&entry.owner).unwrap_or(&fallback);
        text.push_str(&format!("{name} - {}\n", answer_score(entry.count)));
    }

    text
}
