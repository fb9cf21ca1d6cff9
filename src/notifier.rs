//! Notifier: split a message and deliver the chunks in order

use tracing::{debug, info};

use crate::error::Result;
use crate::sender::MessageSender;
use crate::split::Splitter;

/// Sends one logical message as a sequence of transport-sized chunks.
pub struct Notifier {
    sender: Box<dyn MessageSender>,
    splitter: Splitter,
}

impl Notifier {
    /// Create a notifier with the default Telegram chunk limit.
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self {
            sender,
            splitter: Splitter::default(),
        }
    }

    /// Create a notifier with a custom splitter.
    pub fn with_splitter(sender: Box<dyn MessageSender>, splitter: Splitter) -> Self {
        Self { sender, splitter }
    }

    /// Split the message and deliver every chunk, strictly in order.
    ///
    /// Each send is awaited to completion before the next begins; the first
    /// transport failure aborts the remaining sends.
    pub async fn notify(&self, message: &str) -> Result<()> {
        let chunks = self.splitter.split(message);
        let total = chunks.len();

        for (index, chunk) in chunks.iter().enumerate() {
            debug!(
                part = index + 1,
                total,
                chars = chunk.chars().count(),
                "sending chunk"
            );
            self.sender.send(chunk).await?;
        }

        info!(parts = total, sender = self.sender.name(), "message delivered");
        Ok(())
    }
}
