use teloxide::prelude::*;

use crate::bot::AppContext;
use crate::utils::validation::validate_broadcast_text;

/// Arms the announcement handoff: the requester's next text message in this
/// chat is forwarded to the configured broadcast channel.
pub async fn handle_broadcast(bot: Bot, msg: Message, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    if ctx.broadcast_chat.is_none() {
        bot.send_message(
            chat_id,
            "No broadcast channel is configured. Set BROADCAST_CHAT_ID and restart the bot.",
        )
        .await?;
        return Ok(());
    }

    let Some(user) = msg.from() else {
        return Ok(());
    };

    ctx.broadcasts.begin(chat_id.0, user.id.0).await;
    tracing::info!(
        "User {} armed a broadcast in chat {}",
        user.id.0,
        chat_id
    );
    bot.send_message(
        chat_id,
        "Send the announcement text as your next message here.",
    )
    .await?;

    Ok(())
}

/// Delivers a pending announcement. Called from the free-text handler once
/// the armed requester sends their next text message.
pub async fn deliver(bot: Bot, msg: Message, text: &str, ctx: &AppContext) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let Some(target) = ctx.broadcast_chat else {
        bot.send_message(chat_id, "No broadcast channel is configured.")
            .await?;
        return Ok(());
    };

    if let Err(e) = validate_broadcast_text(text) {
        bot.send_message(chat_id, format!("{e}. Use /broadcast to start over."))
            .await?;
        return Ok(());
    }

    match bot.send_message(target, text).await {
        Ok(_) => {
            tracing::info!("Broadcast from chat {} delivered to {}", chat_id, target);
            bot.send_message(chat_id, "Announcement sent.").await?;
        }
        Err(e) => {
            tracing::error!("Failed to deliver broadcast to {}: {}", target, e);
            bot.send_message(chat_id, "Failed to send the announcement.")
                .await?;
        }
    }

    Ok(())
}
