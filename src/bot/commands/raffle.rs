use teloxide::prelude::*;

use crate::bot::AppContext;
use crate::game::error::GameError;
use crate::game::raffle;
use crate::utils::display::resolve_display_name;
use crate::utils::validation::parse_user_id;

/// Draws a winning ticket and announces its owner. Users with more answers
/// hold more tickets and win proportionally more often.
pub async fn handle_roll(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let outcome = ctx
        .games
        .read(chat_id.0, |ledger| {
            let mut rng = rand::thread_rng();
            raffle::draw(ledger, &mut rng)
                .map(|number| (number, raffle::resolve_owner(ledger, number)))
        })
        .await;

    match outcome {
        Err(GameError::EmptyPool) => {
            bot.send_message(chat_id, "The answer list is empty.").await?;
        }
        Err(e) => {
            tracing::warn!("Draw failed in chat {}: {}", chat_id, e);
            bot.send_message(chat_id, "Could not determine a winner.")
                .await?;
        }
        Ok((number, Ok(owner))) => {
            tracing::info!(
                "Draw in chat {} picked answer #{} owned by {}",
                chat_id,
                number,
                owner
            );
            let name = resolve_display_name(&bot, owner).await;
            bot.send_message(chat_id, format!("Winner: #{number} ({name})"))
                .await?;
        }
        Ok((number, Err(_))) => {
            // The pool referenced a number no owner holds any more; the draw
            // simply produced no winner this time.
            tracing::warn!(
                "Draw in chat {} picked answer #{} but no owner holds it",
                chat_id,
                number
            );
            bot.send_message(chat_id, "Could not determine a winner.")
                .await?;
        }
    }

    Ok(())
}

/// Removes a user's tickets from the pool so they cannot win. The target is
/// the author of the replied-to message, or a numeric id argument.
pub async fn handle_exclude(
    bot: Bot,
    msg: Message,
    target_arg: String,
    ctx: &AppContext,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let target = match msg.reply_to_message().and_then(|reply| reply.from()) {
        Some(user) => Some(user.id.0),
        None => parse_user_id(&target_arg).ok(),
    };

    let Some(owner) = target else {
        bot.send_message(
            chat_id,
            "Usage: /rpr_modify <user id>, or send it as a reply to the user's message.",
        )
        .await?;
        return Ok(());
    };

    let outcome = ctx
        .games
        .update(chat_id.0, |ledger| ledger.exclude_owner(owner))
        .await;

    match outcome {
        Ok(Ok(tickets)) => {
            tracing::info!(
                "Excluded user {} from the draw in chat {} ({} tickets removed)",
                owner,
                chat_id,
                tickets
            );
            bot.send_message(chat_id, "The user has been excluded from the draw.")
                .await?;
        }
        Ok(Err(GameError::OwnerNotFound(_))) => {
            bot.send_message(chat_id, "The user was not found.").await?;
        }
        Ok(Err(e)) => {
            tracing::warn!("Failed to exclude user {} in chat {}: {}", owner, chat_id, e);
            bot.send_message(chat_id, "Failed to exclude the user.").await?;
        }
        Err(e) => {
            tracing::error!("Failed to save game state for chat {}: {:#}", chat_id, e);
            bot.send_message(chat_id, "Failed to save the game state, nothing was changed.")
                .await?;
        }
    }

    Ok(())
}
