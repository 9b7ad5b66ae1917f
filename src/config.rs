use anyhow::{anyhow, Result};
use std::env;

/// Process configuration, read once at startup.
///
/// The bot token, spreadsheet id and sheets token have no defaults: if any
/// of them is missing the process must not start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token.
    pub telegram_bot_token: String,
    /// Target Google Sheets spreadsheet id.
    pub spreadsheet_id: String,
    /// Bearer token for the Sheets REST API.
    pub sheets_api_token: String,
    /// Port for the health endpoints.
    pub http_port: u16,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let telegram_bot_token = require_var("TELEGRAM_BOT_TOKEN")?;
        let spreadsheet_id = require_var("SPREADSHEET_ID")?;
        let sheets_api_token = require_var("SHEETS_API_TOKEN")?;

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token,
            spreadsheet_id,
            sheets_api_token,
            http_port,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| anyhow!("{name} must be set"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{name} must be set"));
    }
    Ok(value)
}
