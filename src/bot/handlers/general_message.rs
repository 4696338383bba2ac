use teloxide::prelude::*;

use crate::bot::commands::{answers, broadcast, raffle};
use crate::bot::AppContext;

/// Free-text triggers: the `++`/`плюс` answer shorthand, the `мрр`
/// exclusion shorthand, and the pending-broadcast continuation.
pub async fn handle_general_message(bot: Bot, msg: Message, ctx: AppContext) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let user_id = user.id.0;

    // An armed broadcast consumes the requester's next text message, before
    // any trigger matching.
    if ctx
        .broadcasts
        .take_if_pending(msg.chat.id.0, user_id)
        .await
        .is_some()
    {
        let text = text.to_owned();
        return broadcast::deliver(bot, msg, &text, &ctx).await;
    }

    let trigger = text.trim().to_lowercase();
    match trigger.as_str() {
        "++" | "плюс" => {
            if ctx.access.is_authorized(user_id).await {
                answers::handle_add(bot, msg, &ctx).await?;
            } else {
                tracing::debug!(
                    "Ignoring answer trigger from unauthorized user {} in chat {}",
                    user_id,
                    msg.chat.id
                );
            }
        }
        "мрр" => {
            if ctx.access.is_authorized(user_id).await {
                raffle::handle_exclude(bot, msg, String::new(), &ctx).await?;
            }
        }
        _ => {
            // Anything else is ordinary chat; stay quiet.
        }
    }

    Ok(())
}
