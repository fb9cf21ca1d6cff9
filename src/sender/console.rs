//! Console sender backing --dry-run

use async_trait::async_trait;

use crate::error::Result;
use crate::sender::MessageSender;

/// Writes chunks to stdout instead of the network.
///
/// Needs no credentials, so dry-run skips configuration validation entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl ConsoleSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageSender for ConsoleSender {
    async fn send(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
