use std::sync::Arc;

use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::broadcast::BroadcastStates;

/// Background sweep that returns stale pending broadcasts to idle and lets
/// the requesting chat know the request timed out.
pub struct BroadcastExpiryService {
    bot: Bot,
    states: Arc<BroadcastStates>,
    scheduler: JobScheduler,
}

impl BroadcastExpiryService {
    pub async fn new(
        bot: Bot,
        states: Arc<BroadcastStates>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            states,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Sweep once a minute; the timeout itself is configured on the states map.
        let bot = self.bot.clone();
        let states = self.states.clone();

        let sweep_job = Job::new_async("0 * * * * *", move |_uuid, _l| {
            let bot = bot.clone();
            let states = states.clone();
            Box::pin(async move {
                expire_pending_broadcasts(bot, states).await;
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Broadcast expiry service started - sweeping every minute");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn sweep_now(&self) {
        expire_pending_broadcasts(self.bot.clone(), self.states.clone()).await;
    }
}

async fn expire_pending_broadcasts(bot: Bot, states: Arc<BroadcastStates>) {
    for (chat_id, pending) in states.sweep_expired().await {
        tracing::info!(
            "Pending broadcast from user {} in chat {} timed out",
            pending.requester,
            chat_id
        );
        if let Err(e) = bot
            .send_message(
                teloxide::types::ChatId(chat_id),
                "The broadcast request timed out. Use /broadcast to start over.",
            )
            .await
        {
            tracing::error!("Failed to notify chat {} about expiry: {}", chat_id, e);
        }
    }
}
