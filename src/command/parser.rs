//! Command definitions
//!
//! Parses whitespace-separated tokens into commands.

use crate::error::CommandError;

/// Separator between commands on one line
const COMMAND_SEPARATOR: char = ';';

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert or overwrite a key
    Put { key: String, value: String },

    /// Look up a key
    Get { key: String },

    /// Delete a key
    Remove { key: String },

    /// Print every key
    List,

    /// Flush and end the session
    Exit,
}

impl Command {
    /// Parse one command (no `;` inside)
    ///
    /// Returns `Ok(None)` for a blank command.
    pub fn parse(text: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match (name, args) {
            ("put", &[key, value]) => Command::Put {
                key: key.to_string(),
                value: value.to_string(),
            },
            ("get", &[key]) => Command::Get {
                key: key.to_string(),
            },
            ("remove", &[key]) => Command::Remove {
                key: key.to_string(),
            },
            ("list", &[]) => Command::List,
            ("exit", &[]) => Command::Exit,
            ("put" | "get" | "remove" | "list" | "exit", _) => {
                return Err(CommandError::WrongArity {
                    command: name.to_string(),
                })
            }
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// The command's name as typed
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "put",
            Command::Get { .. } => "get",
            Command::Remove { .. } => "remove",
            Command::List => "list",
            Command::Exit => "exit",
        }
    }
}

/// Split a command line into its `;`-separated commands
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(COMMAND_SEPARATOR).map(str::trim)
}
