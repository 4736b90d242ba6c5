//! Command Module
//!
//! The text command surface of the interpreter.
//!
//! ## Command Line Format
//! ```text
//! put K V; get K; remove K; list; exit
//! ```
//! Commands are separated by `;`; each command is split on whitespace.
//!
//! ### Commands
//! | command      | output                                  |
//! |--------------|-----------------------------------------|
//! | `put K V`    | `new`, or `overwrite` + previous value  |
//! | `get K`      | `found` + value, or `not found`         |
//! | `remove K`   | `removed`, or `not found`               |
//! | `list`       | keys joined by `, `                     |
//! | `exit`       | flush and terminate                     |

mod parser;
mod response;

pub use parser::{split_line, Command};
pub use response::Response;
