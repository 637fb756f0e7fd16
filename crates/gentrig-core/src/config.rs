//! Trigger configuration.
//!
//! Both triggers are driven by environment variables at the process
//! boundary (`GOFILE`, `PROJECT_ROOT`). The variables are read exactly
//! once, by the CLI, and carried into the core as plain values so the
//! triggers can be exercised without touching the process environment.

use std::path::PathBuf;

use crate::error::{TriggerError, TriggerResult};

/// Configuration for one go-enum invocation.
#[derive(Debug, Clone)]
pub struct EnumGenConfig {
    /// Name of the source file the generator should process (`GOFILE`).
    pub source_file: String,
}

impl EnumGenConfig {
    pub fn new(source_file: impl Into<String>) -> TriggerResult<Self> {
        let source_file = source_file.into();
        if source_file.is_empty() {
            return Err(TriggerError::MissingConfig("GOFILE".to_string()));
        }
        Ok(Self { source_file })
    }
}

/// Configuration for one sqlc invocation.
#[derive(Debug, Clone)]
pub struct SqlcGenConfig {
    /// Project root holding `config/sqlc.yaml` (`PROJECT_ROOT`).
    pub project_root: PathBuf,
}

impl SqlcGenConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> TriggerResult<Self> {
        let project_root = project_root.into();
        if project_root.as_os_str().is_empty() {
            return Err(TriggerError::MissingConfig("PROJECT_ROOT".to_string()));
        }
        Ok(Self { project_root })
    }

    /// Path of the template config inside the project tree.
    pub fn template_path(&self) -> PathBuf {
        self.project_root.join("config").join("sqlc.yaml")
    }
}
