//! Delivery capability for resolved messages
//!
//! A `MessageSender` delivers one chunk per call. The Bot API implementation
//! talks to Telegram over HTTPS; the console implementation backs --dry-run.
//! The implementation is picked at construction time, never at send time.

use async_trait::async_trait;

use crate::error::Result;

mod console;
mod telegram;

pub use console::ConsoleSender;
pub use telegram::BotSender;

/// One-way transport for a single message chunk.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver one chunk of message text.
    async fn send(&self, text: &str) -> Result<()>;

    /// Sender name for logging.
    fn name(&self) -> &'static str;
}
