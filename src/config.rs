//! Configuration for Filemap
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Filemap session
#[derive(Debug, Clone)]
pub struct Config {
    /// The single database file. Read once at startup, rewritten in full
    /// on exit (normal or fatal).
    pub db_file: PathBuf,

    /// Prompt printed before each line in interactive mode
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_file: PathBuf::from("filemap.db"),
            prompt: "$ ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_file = path.into();
        self
    }

    /// Set the interactive prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
