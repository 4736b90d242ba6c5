//! # Filemap
//!
//! A persistent key-value store kept in a single flat file:
//! - String keys and values held in memory, sorted by key
//! - Custom binary file layout (key table + value blob)
//! - Line-oriented command interpreter (`put`/`get`/`remove`/`list`/`exit`)
//! - Whole-file rewrite on exit, and on fatal errors as a best effort
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interpreter                             │
//! │            (Batch args / Interactive lines)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Database                               │
//! │              (file path + session Store)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │    Codec    │
//!   │ (BTreeMap)  │          │ (load/flush)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod codec;
pub mod database;
pub mod command;
pub mod interpreter;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CommandError, FilemapError, Result};
pub use config::Config;
pub use store::Store;
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Filemap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
