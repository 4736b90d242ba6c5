//! Database Module
//!
//! The session context: one database file and the Store loaded from it.
//!
//! ## Responsibilities
//! - Open (or create) the database file at startup and decode it
//! - Hand the Store to the command interpreter
//! - Rewrite the whole file from the Store on exit
//!
//! The file is opened and closed around each load and flush; nothing is
//! held open between them. Concurrent sessions on the same file are not
//! guarded against.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codec;
use crate::config::Config;
use crate::error::{FilemapError, Result};
use crate::store::Store;

/// A database file together with its in-memory contents
#[derive(Debug)]
pub struct Database {
    /// Path of the backing file
    path: PathBuf,

    /// Current contents
    store: Store,
}

impl Database {
    /// Create a session for `path` with an empty Store, without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: Store::new(),
        }
    }

    /// Create a session and load the file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut database = Self::new(path);
        database.load()?;
        Ok(database)
    }

    /// Open the file named by the config
    pub fn open_config(config: &Config) -> Result<Self> {
        Self::open(config.db_file.clone())
    }

    /// Decode the file into the session's Store
    ///
    /// A missing file is created empty. A zero-length file yields an empty
    /// Store. On `CorruptFile` the Store keeps whatever was decoded before
    /// the damage.
    pub fn load(&mut self) -> Result<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "database file missing, creating it");
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(&self.path)
                    .map_err(|e| self.unavailable(e))?;
                return Ok(());
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let file_len = file.metadata().map_err(|e| self.unavailable(e))?.len();
        if file_len > 0 {
            if let Err(e) = codec::decode_into(BufReader::new(file), file_len, &mut self.store) {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to decode database file");
                return Err(e);
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            bytes = file_len,
            records = self.store.len(),
            "database loaded"
        );
        Ok(())
    }

    /// Rewrite the file from the Store, returning the number of bytes written
    ///
    /// Not atomic: a crash mid-write leaves a damaged file.
    pub fn flush(&self) -> Result<u64> {
        self.write_file().map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write database file");
            FilemapError::WriteFailure {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })
    }

    fn write_file(&self) -> Result<u64> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let written = codec::encode(&self.store, &mut writer)?;
        writer.flush()?;

        let file = writer
            .into_inner()
            .map_err(|e| FilemapError::Io(e.into_error()))?;
        file.sync_all()?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = written,
            records = self.store.len(),
            "database flushed"
        );
        Ok(written)
    }

    fn unavailable(&self, source: io::Error) -> FilemapError {
        FilemapError::DatabaseUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Consume the session, keeping only its contents
    pub fn into_store(self) -> Store {
        self.store
    }
}
