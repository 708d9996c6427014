//! Replay Module
//!
//! Drives an `LruCache<String, String>` from line-oriented text commands.
//!
//! # Commands
//! - `put <key> <value>` prints `OK`
//! - `get <key>` prints the value or `(miss)`
//! - `peek <key>` same as `get` without touching recency
//! - `stats` prints the counters
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::cache::LruCache;
use crate::error::{CacheError, Result};

/// Output for a lookup that found nothing.
pub const MISS: &str = "(miss)";

// == Command ==
/// A parsed replay line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Stats,
}

impl Command {
    /// Parses one line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            ["put", key, value] => Command::Put {
                key: key.to_string(),
                value: value.to_string(),
            },
            ["get", key] => Command::Get {
                key: key.to_string(),
            },
            ["peek", key] => Command::Peek {
                key: key.to_string(),
            },
            ["stats"] => Command::Stats,
            _ => return Err(CacheError::InvalidCommand(line.to_string())),
        };
        Ok(Some(command))
    }

    /// Applies the command and returns the line to print.
    pub fn apply(self, cache: &mut LruCache<String, String>) -> String {
        match self {
            Command::Put { key, value } => {
                cache.put(key, value);
                "OK".to_string()
            }
            Command::Get { key } => cache
                .get(key.as_str())
                .cloned()
                .unwrap_or_else(|| MISS.to_string()),
            Command::Peek { key } => cache
                .peek(key.as_str())
                .cloned()
                .unwrap_or_else(|| MISS.to_string()),
            Command::Stats => cache.stats().to_string(),
        }
    }
}

// == Run ==
/// Replays every line of `input` against `cache`, writing one result line per
/// command to `output`.
///
/// Malformed lines, including lines that are not valid UTF-8, are reported
/// as `ERR <message>` and skipped. Only read or write failures abort the
/// replay.
pub fn run<R, W>(cache: &mut LruCache<String, String>, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for (index, line) in input.lines().enumerate() {
        // The bad bytes are already consumed, so the next line still reads.
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(line = index + 1, "{}", err);
                writeln!(output, "ERR {}", err)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        match Command::parse(&line) {
            Ok(Some(command)) => {
                debug!(line = index + 1, ?command, "Applying command");
                writeln!(output, "{}", command.apply(cache))?;
            }
            Ok(None) => {}
            Err(err) => {
                warn!(line = index + 1, "{}", err);
                writeln!(output, "ERR {}", err)?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
