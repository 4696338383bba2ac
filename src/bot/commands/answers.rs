use teloxide::prelude::*;

use crate::bot::commands::leaderboard;
use crate::bot::AppContext;
use crate::game::error::GameError;
use crate::utils::display::{answer_score, user_display_name};
use crate::utils::validation::parse_answer_number;

/// Records an answer for the author of the replied-to message. Without a
/// reply target the command degrades to showing the leaderboard, which is
/// what the bot has always done.
pub async fn handle_add(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let Some(reply) = msg.reply_to_message() else {
        return leaderboard::handle_leaderboard(bot, msg.clone(), ctx).await;
    };
    let Some(target) = reply.from() else {
        bot.send_message(chat_id, "Could not tell whose message that is.")
            .await?;
        return Ok(());
    };

    let owner = target.id.0;
    let text = reply.text().map(str::to_owned);
    let name = user_display_name(target);

    let outcome = ctx
        .games
        .update(chat_id.0, |ledger| {
            ledger
                .record(owner, text)
                .map(|answer| (answer, ledger.count_for(owner)))
        })
        .await;

    match outcome {
        Ok(Ok((answer, total))) => {
            tracing::info!(
                "Recorded answer #{} for user {} in chat {}",
                answer.number,
                owner,
                chat_id
            );
            bot.send_message(
                chat_id,
                format!(
                    "Recorded answer #{} for {}. They now have {}.",
                    answer.number,
                    name,
                    answer_score(total)
                ),
            )
            .await?;
            leaderboard::handle_leaderboard(bot, msg.clone(), ctx).await?;
        }
        Ok(Err(GameError::CapacityExceeded(cap))) => {
            bot.send_message(chat_id, format!("The limit of {cap} answers has been reached."))
                .await?;
        }
        Ok(Err(e)) => {
            tracing::warn!("Failed to record an answer in chat {}: {}", chat_id, e);
            bot.send_message(chat_id, "Failed to record the answer.")
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save game state for chat {}: {:#}", chat_id, e);
            bot.send_message(chat_id, "Failed to save the game state, the answer was not recorded.")
                .await?;
        }
    }

    Ok(())
}

/// Deletes an answer by number. Every answer above it is renumbered down by
/// one, so the numbers shown by the last leaderboard are the ones to use.
pub async fn handle_remove(
    bot: Bot,
    msg: Message,
    number_arg: String,
    ctx: &AppContext,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let number = match parse_answer_number(&number_arg) {
        Ok(number) => number,
        Err(_) => {
            bot.send_message(chat_id, "Usage: /minus <answer number>")
                .await?;
            return Ok(());
        }
    };

    let outcome = ctx.games.update(chat_id.0, |ledger| ledger.remove(number)).await;

    match outcome {
        Ok(Ok(_)) => {
            tracing::info!("Deleted answer #{} in chat {}", number, chat_id);
            bot.send_message(chat_id, format!("Answer #{number} deleted."))
                .await?;
        }
        Ok(Err(GameError::AnswerNotFound(_))) => {
            bot.send_message(chat_id, format!("Answer #{number} was not found."))
                .await?;
        }
        Ok(Err(e)) => {
            tracing::warn!("Failed to delete answer #{} in chat {}: {}", number, chat_id, e);
            bot.send_message(chat_id, "Failed to delete the answer.")
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save game state for chat {}: {:#}", chat_id, e);
            bot.send_message(chat_id, "Failed to save the game state, nothing was deleted.")
                .await?;
        }
    }

    Ok(())
}

/// Empties the whole game: answers, scores, and the ticket pool.
pub async fn handle_clear(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    match ctx.games.update(chat_id.0, |ledger| ledger.clear()).await {
        Ok(()) => {
            tracing::info!("Cleared the game in chat {}", chat_id);
            bot.send_message(chat_id, "The leaderboard and answer list have been cleared.")
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save game state for chat {}: {:#}", chat_id, e);
            bot.send_message(chat_id, "Failed to save the game state.")
                .await?;
        }
    }

    Ok(())
}
