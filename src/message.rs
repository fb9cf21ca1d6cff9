//! Message source resolution
//!
//! The message body comes from exactly one of: a literal argument, a UTF-8
//! file, or standard input.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Message source selection from the CLI.
#[derive(Debug, Clone, Default)]
pub struct MessageInput {
    /// Literal message text.
    pub text: Option<String>,
    /// Path to a UTF-8 text file with the message.
    pub file: Option<PathBuf>,
}

/// Resolve the raw message body from the selected source.
///
/// Literal text and a file are mutually exclusive; with neither given the
/// body is read from stdin, which must be piped rather than a terminal.
pub fn resolve_message(input: &MessageInput) -> Result<String> {
    match (&input.text, &input.file) {
        (Some(_), Some(_)) => Err(Error::Usage(
            "Use only one of --text or --file".to_string(),
        )),
        (None, Some(path)) => {
            debug!(path = %path.display(), "reading message from file");
            Ok(std::fs::read_to_string(path)?)
        }
        (Some(text), None) => Ok(text.clone()),
        (None, None) => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::Usage(
            "Provide --text, --file, or pipe a message via stdin".to_string(),
        ));
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Strip boundary newlines and reject blank messages.
pub fn trim_message(raw: &str) -> Result<String> {
    let trimmed = raw.trim_matches('\n');
    if trimmed.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    Ok(trimmed.to_string())
}
