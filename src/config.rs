use anyhow::{anyhow, Result};
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/birthday_bot.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Chat that receives the daily congratulations
    pub birthday_chat_id: i64,
    pub database_url: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let chat_id_str = env::var("BIRTHDAY_CHAT_ID")
            .map_err(|_| anyhow!("BIRTHDAY_CHAT_ID must be set"))?;
        let birthday_chat_id = chat_id_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BIRTHDAY_CHAT_ID"))?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_url = if database_url.trim().is_empty() {
            DEFAULT_DATABASE_URL.to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            birthday_chat_id,
            database_url,
            http_port,
        })
    }

    /// Database settings only, for tools that never talk to Telegram.
    pub fn database_url_from_env() -> String {
        env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }
}
