//! Error types for engine configuration.
//!
//! Searching and evaluating never fail; only loading a configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Search depth outside the supported range
    #[error("search depth {depth} out of range (must be 1-{max})")]
    InvalidDepth { depth: u8, max: u8 },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
