//! # Questionnaire Bot Main Entry Point
//!
//! Initializes logging, loads configuration, builds the Google Sheets
//! client and shared state, and runs the Telegram dispatcher alongside the
//! HTTP health endpoints.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questionnaire_bot::bot::handlers;
use questionnaire_bot::config::Config;
use questionnaire_bot::questionnaire::QuestionnaireDefinition;
use questionnaire_bot::services::health::HealthService;
use questionnaire_bot::sheets::SheetsClient;
use questionnaire_bot::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questionnaire_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing variables are fatal before anything connects
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Questionnaire Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Spreadsheet: {}, HTTP Port: {}",
        config.spreadsheet_id, config.http_port
    );

    let sheets = Arc::new(SheetsClient::new(
        config.spreadsheet_id.clone(),
        config.sheets_api_token.clone(),
    ));
    let state = Arc::new(AppState::new(
        QuestionnaireDefinition::default_survey(),
        sheets.clone(),
    ));

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);

    let health_service = HealthService::new(sheets);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;
    info!("Health check server starting on port {}", config.http_port);

    // Run both the dispatcher and the health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handlers::schema())
            .dependencies(dptree::deps![state])
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

    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
