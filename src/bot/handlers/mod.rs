pub mod general_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::AppContext;

pub struct BotHandler {
    pub ctx: AppContext,
}

impl BotHandler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx = self.ctx.clone();
        let ctx_text = self.ctx.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let ctx = ctx.clone();
                        async move { message::command_handler(bot, msg, cmd, ctx).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot, msg| {
                let ctx = ctx_text.clone();
                async move { general_message::handle_general_message(bot, msg, ctx).await }
            }))
    }
}
