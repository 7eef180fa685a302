//! Command parsing for the line-oriented driver
//!
//! One command per line, whitespace separated:
//! - `put <key> <value...>` - store a value (the value is the rest of the line)
//! - `get <key>` - retrieve a value
//! - `del <key>` - delete a key
//! - `count` - number of resident entries
//! - `print` - dump all entries in key order
//! - `stats` - cache statistics
//!
//! `put` and `get` accept missing operands; the cache treats those as absent
//! keys or values rather than as parse errors.

use thiserror::Error;

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    Get {
        key: Option<String>,
    },
    Delete {
        key: String,
    },
    Count,
    Print,
    Stats,
}

/// Reasons a line is not a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),
}

impl Command {
    /// Parses a single input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        if verb.is_empty() {
            return Err(CommandError::Empty);
        }

        match verb.to_ascii_lowercase().as_str() {
            "put" | "set" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (non_empty(key), non_empty(value.trim())),
                    None => (non_empty(rest), None),
                };
                Ok(Command::Put { key, value })
            }
            "get" => Ok(Command::Get {
                key: non_empty(rest),
            }),
            "del" | "delete" => non_empty(rest)
                .map(|key| Command::Delete { key })
                .ok_or(CommandError::MissingArgument("del")),
            "count" => Ok(Command::Count),
            "print" => Ok(Command::Print),
            "stats" => Ok(Command::Stats),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
