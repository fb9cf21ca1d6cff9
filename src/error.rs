//! Error types for the Telegram notifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Empty message; nothing to send")]
    EmptyMessage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Telegram API error: {0}")]
    Transport(String),
}

impl Error {
    /// Process exit code reported for this error.
    ///
    /// Configuration, usage, empty-message, and client-setup problems exit
    /// with 2; IO and transport failures exit with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) | Error::Usage(_) | Error::EmptyMessage | Error::Client(_) => 2,
            Error::Io(_) | Error::Transport(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
