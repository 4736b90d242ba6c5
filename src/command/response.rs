//! Response definitions
//!
//! What a command prints on success.

use std::fmt;

/// Result of running a command against the Store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `put` created a key
    New,

    /// `put` replaced a value (carries the previous one)
    Overwrite(String),

    /// `get` hit
    Found(String),

    /// `get` or `remove` miss
    NotFound,

    /// `remove` hit
    Removed,

    /// `list` output, ascending
    Keys(Vec<String>),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::New => f.write_str("new"),
            Response::Overwrite(previous) => write!(f, "overwrite\n{previous}"),
            Response::Found(value) => write!(f, "found\n{value}"),
            Response::NotFound => f.write_str("not found"),
            Response::Removed => f.write_str("removed"),
            Response::Keys(keys) => f.write_str(&keys.join(", ")),
        }
    }
}
