use anyhow::{anyhow, Result};
use std::env;

use crate::schedule::ScheduleLocale;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/schedule.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub locale: ScheduleLocale,
    /// Group browsed when a navigation button arrives without its message.
    pub default_group: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = Self::database_url_from_env();

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let locale = match env::var("SCHEDULE_LOCALE") {
            Ok(code) if !code.trim().is_empty() => code
                .parse()
                .map_err(|e| anyhow!("Invalid SCHEDULE_LOCALE: {e}"))?,
            _ => ScheduleLocale::default(),
        };

        let default_group = env::var("DEFAULT_GROUP")
            .ok()
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty());

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            locale,
            default_group,
        })
    }

    /// `DATABASE_URL`, or the default when unset or blank. Tools that only
    /// touch storage use this without requiring a bot token.
    pub fn database_url_from_env() -> String {
        env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }
}
