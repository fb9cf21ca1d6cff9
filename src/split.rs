//! Message splitting for the Telegram length limit
//!
//! Telegram rejects messages longer than 4096 characters, so long
//! notifications go out as several consecutive messages. Cuts prefer the last
//! newline inside the window so lines stay intact, unless that newline sits
//! in the first half of the window and would leave a tiny chunk.

use crate::config::TELEGRAM_MESSAGE_LIMIT;

/// Splits message text into chunks that fit one sendMessage call.
#[derive(Debug, Clone)]
pub struct Splitter {
    limit: usize,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(TELEGRAM_MESSAGE_LIMIT)
    }
}

impl Splitter {
    /// Create a splitter with a custom chunk limit, in characters.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
        }
    }

    /// Split text into ordered chunks of at most `limit` characters.
    ///
    /// The cut lands on the last newline within the first `limit` characters
    /// of the remainder when that newline is at or past the window midpoint;
    /// otherwise it is a hard cut at exactly `limit` characters. A newline
    /// consumed by a cut is dropped from the start of the next chunk.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut remaining = text;

        loop {
            // Scan the window of the first `limit` characters, tracking the
            // byte offset where the window ends and the last newline seen.
            let mut chars_seen = 0usize;
            let mut window_end = None;
            let mut last_newline = None;

            for (offset, ch) in remaining.char_indices() {
                if chars_seen == self.limit {
                    window_end = Some(offset);
                    break;
                }
                if ch == '\n' {
                    last_newline = Some((offset, chars_seen));
                }
                chars_seen += 1;
            }

            // The whole remainder fits in one chunk.
            let Some(window_end) = window_end else {
                parts.push(remaining.to_string());
                break;
            };

            let cut = match last_newline {
                Some((offset, position)) if position >= self.limit / 2 => offset,
                _ => window_end,
            };

            parts.push(remaining[..cut].to_string());
            remaining = &remaining[cut..];
            if let Some(stripped) = remaining.strip_prefix('\n') {
                remaining = stripped;
            }
        }

        parts
    }
}
