//! # Birthday Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the database, starts the
//! birthday scheduler and the health server, and runs the Telegram bot.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::dispatching::dialogue::InMemStorage;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use birthday_bot::bot::commands::upload::UploadState;
use birthday_bot::bot::handlers::BotHandler;
use birthday_bot::config::Config;
use birthday_bot::database::connection::DatabaseManager;
use birthday_bot::services::announcer::Announcer;
use birthday_bot::services::health::HealthService;
use birthday_bot::services::scheduler::BirthdayScheduler;
use birthday_bot::utils::logging::log_system_event;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "birthday_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Birthday Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}, Birthday chat: {}",
        config.database_url, config.http_port, config.birthday_chat_id);

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(db_arc.as_ref().clone());
    info!("Telegram bot initialized successfully");

    // Initialize and start birthday scheduler
    let announcer = Arc::new(Announcer::new(
        bot.clone(),
        db_arc.clone(),
        ChatId(config.birthday_chat_id),
    ));
    let mut birthday_scheduler = match BirthdayScheduler::new(announcer).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create birthday scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create birthday scheduler: {}", e));
        }
    };

    if let Err(e) = birthday_scheduler.start().await {
        tracing::error!("Failed to start birthday scheduler: {}", e);
    } else if let Some(job_id) = birthday_scheduler.job_id() {
        log_system_event("Birthday scheduler started", Some(&format!("job {job_id}")));
    }

    // Initialize health service
    let health_service = HealthService::new(db_arc.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        let storage: Arc<InMemStorage<UploadState>> = InMemStorage::new();
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![storage])
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

    if let Err(e) = birthday_scheduler.stop().await {
        tracing::warn!("Error stopping birthday scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
