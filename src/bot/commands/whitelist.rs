use teloxide::prelude::*;

use crate::bot::AppContext;
use crate::utils::validation::parse_user_id;

pub async fn handle_whitelist_add(
    bot: Bot,
    msg: Message,
    user_id_arg: String,
    ctx: &AppContext,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let user_id = match parse_user_id(&user_id_arg) {
        Ok(user_id) => user_id,
        Err(_) => {
            bot.send_message(chat_id, "Usage: /rpr_wladd <user id>").await?;
            return Ok(());
        }
    };

    match ctx.access.add(user_id).await {
        Ok(true) => {
            tracing::info!("User {} added to the whitelist", user_id);
            bot.send_message(chat_id, format!("User {user_id} added to the whitelist."))
                .await?;
        }
        Ok(false) => {
            bot.send_message(chat_id, format!("User {user_id} is already on the whitelist."))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save the whitelist: {:#}", e);
            bot.send_message(chat_id, "Failed to save the whitelist.").await?;
        }
    }

    Ok(())
}

pub async fn handle_whitelist_remove(
    bot: Bot,
    msg: Message,
    user_id_arg: String,
    ctx: &AppContext,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let user_id = match parse_user_id(&user_id_arg) {
        Ok(user_id) => user_id,
        Err(_) => {
            bot.send_message(chat_id, "Usage: /rpr_wldel <user id>").await?;
            return Ok(());
        }
    };

    // Removing a non-member is a quiet success, matching set semantics.
    match ctx.access.remove(user_id).await {
        Ok(_) => {
            tracing::info!("User {} removed from the whitelist", user_id);
            bot.send_message(chat_id, format!("User {user_id} removed from the whitelist."))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save the whitelist: {:#}", e);
            bot.send_message(chat_id, "Failed to save the whitelist.").await?;
        }
    }

    Ok(())
}
