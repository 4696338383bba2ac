//! # Answer Raffle Bot Main Entry Point
//!
//! Initializes logging, loads configuration, prepares the document store,
//! starts the broadcast expiry sweep, and runs the Telegram bot alongside
//! the health endpoint server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod game;
mod services;
mod storage;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::bot::AppContext;
use crate::config::Config;
use crate::services::access::AccessService;
use crate::services::broadcast::BroadcastStates;
use crate::services::expiry::BroadcastExpiryService;
use crate::services::game::GameService;
use crate::services::health::HealthService;
use crate::storage::StateStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "answer_raffle_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Answer Raffle Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Data dir: {}, HTTP Port: {}",
        config.data_dir, config.http_port
    );

    // Initialize the document store
    info!("Initializing document store...");
    let store = StateStore::new(&config.data_dir);
    store.init().await?;
    let store_arc = Arc::new(store);
    info!("Document store initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);

    let games = Arc::new(GameService::new(
        store_arc.as_ref().clone(),
        config.max_answers,
    ));
    let access = Arc::new(
        AccessService::load(store_arc.as_ref().clone(), config.admin_user_id).await,
    );
    let broadcasts = Arc::new(BroadcastStates::new(config.broadcast_timeout_secs));

    let ctx = AppContext {
        games,
        access,
        broadcasts: broadcasts.clone(),
        broadcast_chat: config.broadcast_chat_id.map(ChatId),
    };
    let handler = BotHandler::new(ctx);
    info!("Telegram bot initialized successfully");

    // Initialize and start the broadcast expiry sweep
    info!("Initializing broadcast expiry service...");
    let mut expiry_service = match BroadcastExpiryService::new(bot.clone(), broadcasts.clone()).await
    {
        Ok(service) => {
            info!("Broadcast expiry service initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create broadcast expiry service: {}", e);
            return Err(anyhow::anyhow!(
                "Failed to create broadcast expiry service: {}",
                e
            ));
        }
    };

    if let Err(e) = expiry_service.start().await {
        tracing::error!("Failed to start broadcast expiry service: {}", e);
    } else {
        info!("Broadcast expiry service started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(store_arc.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop the expiry sweep on shutdown
    if let Err(e) = expiry_service.stop().await {
        tracing::warn!("Error stopping broadcast expiry service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
