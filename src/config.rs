use anyhow::{anyhow, Result};
use std::env;

/// Default answer cap, matching the capped game variant. `MAX_ANSWERS=0`
/// turns the cap off entirely.
const DEFAULT_MAX_ANSWERS: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_user_id: u64,
    pub data_dir: String,
    pub broadcast_chat_id: Option<i64>,
    pub max_answers: Option<usize>,
    pub broadcast_timeout_secs: u64,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let admin_user_id = env::var("ADMIN_USER_ID")
            .map_err(|_| anyhow!("ADMIN_USER_ID must be set"))?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid ADMIN_USER_ID"))?;

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let data_dir = if data_dir.trim().is_empty() {
            "./data".to_string()
        } else {
            data_dir
        };

        let broadcast_chat_id = match env::var("BROADCAST_CHAT_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid BROADCAST_CHAT_ID"))?,
            ),
            _ => None,
        };

        let max_answers = match env::var("MAX_ANSWERS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let cap: usize = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Invalid MAX_ANSWERS"))?;
                if cap == 0 {
                    None
                } else {
                    Some(cap)
                }
            }
            _ => Some(DEFAULT_MAX_ANSWERS),
        };

        let broadcast_timeout_secs = env::var("BROADCAST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BROADCAST_TIMEOUT_SECS"))?;

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            admin_user_id,
            data_dir,
            broadcast_chat_id,
            max_answers,
            broadcast_timeout_secs,
            http_port,
        })
    }
}
