//! Telegram Bot API sender

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::NotifyConfig;
use crate::error::{Error, Result};
use crate::sender::MessageSender;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends message chunks through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct BotSender {
    http: Client,
    base_url: String,
    bot_token: String,
    chat_id: i64,
}

impl BotSender {
    /// Create a sender for the given credentials.
    pub fn new(config: &NotifyConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("telegram_notify/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: TELEGRAM_API_URL.to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id,
        })
    }

    /// Create a sender with a custom base url (primarily for tests).
    pub fn with_base_url<S: Into<String>>(config: &NotifyConfig, base_url: S) -> Result<Self> {
        let mut sender = Self::new(config)?;
        sender.base_url = base_url.into();
        Ok(sender)
    }
}

#[async_trait]
impl MessageSender for BotSender {
    async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let params = [
            ("chat_id", self.chat_id.to_string()),
            ("text", text.to_string()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to reach Telegram: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read Telegram response: {}", e)))?;

        if status != StatusCode::OK {
            return Err(Error::Transport(format!(
                "Telegram returned HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let envelope: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Transport(format!("Telegram returned non-JSON response: {} ({})", body, e))
        })?;

        if !envelope.ok {
            return Err(Error::Transport(
                envelope
                    .description
                    .unwrap_or_else(|| "request rejected".to_string()),
            ));
        }

        debug!(chars = text.chars().count(), "chunk delivered");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
