use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{answers, broadcast, leaderboard, raffle, whitelist, Command};
use crate::bot::AppContext;

/// Commands anyone may run; everything else needs a whitelisted user.
fn requires_authorization(cmd: &Command) -> bool {
    !matches!(cmd, Command::Help | Command::Start)
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: AppContext,
) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0;

    // Unauthorized users are ignored without a reply; the log line is the
    // only trace they leave.
    if requires_authorization(&cmd) && !ctx.access.is_authorized(user_id).await {
        tracing::debug!(
            "Ignoring command from unauthorized user {} in chat {}",
            user_id,
            msg.chat.id
        );
        return Ok(());
    }

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "Hi! I keep score of correct answers and raffle a winner.\n\n\
                 Reply to an answer with ++ to record it.\n\
                 /rprlb shows the leaderboard.\n\
                 /rpr draws a winner.",
            )
            .await?;
        }
        Command::Add | Command::Plus => {
            answers::handle_add(bot, msg, &ctx).await?;
        }
        Command::Leaderboard | Command::Table => {
            leaderboard::handle_leaderboard(bot, msg, &ctx).await?;
        }
        Command::Minus { number } | Command::Del { number } => {
            answers::handle_remove(bot, msg, number, &ctx).await?;
        }
        Command::Roll => {
            raffle::handle_roll(bot, msg, &ctx).await?;
        }
        Command::Exclude { target } => {
            raffle::handle_exclude(bot, msg, target, &ctx).await?;
        }
        Command::WhitelistAdd { user_id } => {
            whitelist::handle_whitelist_add(bot, msg, user_id, &ctx).await?;
        }
        Command::WhitelistRemove { user_id } => {
            whitelist::handle_whitelist_remove(bot, msg, user_id, &ctx).await?;
        }
        Command::ClearRatio => {
            answers::handle_clear(bot, msg, &ctx).await?;
        }
        Command::Broadcast => {
            broadcast::handle_broadcast(bot, msg, &ctx).await?;
        }
    }

    Ok(())
}
