//! Error types for trigger invocations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("missing required configuration: {0}")]
    MissingConfig(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("failed to spawn generator: {0}")]
    Spawn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TriggerResult<T> = std::result::Result<T, TriggerError>;
