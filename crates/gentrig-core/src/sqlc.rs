//! Trigger for the sqlc SQL-to-code compiler.
//!
//! sqlc discovers its configuration by convention: a `sqlc.yaml` in the
//! directory it runs in. The project keeps the real file under
//! `config/sqlc.yaml`, so each run stages a copy into the working
//! directory, runs `go tool github.com/sqlc-dev/sqlc/cmd/sqlc generate`,
//! and removes the staged copy afterwards. Generated code lands under
//! `sqlgen/` in the working directory.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::SqlcGenConfig;
use crate::error::{TriggerError, TriggerResult};

/// Module path of the generator tool.
const SQLC_TOOL: &str = "github.com/sqlc-dev/sqlc/cmd/sqlc";

/// Name sqlc expects the staged config under.
const STAGED_CONFIG: &str = "sqlc.yaml";

/// Subdirectory sqlc writes generated code into.
const OUTPUT_DIR: &str = "sqlgen";

/// Service wrapping one sqlc invocation.
pub struct SqlcGenTrigger {
    /// Path to the go binary
    go_bin: String,
}

impl Default for SqlcGenTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlcGenTrigger {
    pub fn new() -> Self {
        let go_bin = std::env::var("GENTRIG_GO_BIN").unwrap_or_else(|_| "go".to_string());
        Self { go_bin }
    }

    /// Use a specific binary instead of the `GENTRIG_GO_BIN` / `go` default.
    pub fn with_binary(go_bin: impl Into<String>) -> Self {
        Self { go_bin: go_bin.into() }
    }

    /// Stage the config, run the generator in `work_dir`, unstage.
    ///
    /// The staged copy never outlives the invocation: once it exists, it
    /// is removed on every exit path, whether the generator succeeded,
    /// exited nonzero, or could not be spawned at all. The exit status is
    /// recorded on the report rather than turned into an error.
    pub async fn run(
        &self,
        config: &SqlcGenConfig,
        work_dir: &Path,
    ) -> TriggerResult<SqlcGenReport> {
        let template = config.template_path();
        if !template.is_file() {
            return Err(TriggerError::ConfigNotFound(template));
        }

        let staged = work_dir.join(STAGED_CONFIG);
        tokio::fs::copy(&template, &staged).await?;
        debug!(from = %template.display(), to = %staged.display(), "Staged sqlc config");

        info!(dir = %work_dir.display(), "Running sqlc generate");
        let run_result = Command::new(&self.go_bin)
            .args(["tool", SQLC_TOOL, "generate"])
            .current_dir(work_dir)
            .status()
            .await;

        // Unstage before looking at the invocation result.
        tokio::fs::remove_file(&staged).await?;

        let status = run_result.map_err(|e| TriggerError::Spawn(e.to_string()))?;
        if !status.success() {
            warn!(%status, "sqlc exited with failure");
        }

        Ok(SqlcGenReport {
            output_dir: work_dir.join(OUTPUT_DIR),
            status,
        })
    }
}

/// Outcome of one sqlc invocation.
#[derive(Debug)]
pub struct SqlcGenReport {
    /// Directory the generated code is expected under.
    pub output_dir: PathBuf,
    /// Exit status of the generator.
    pub status: ExitStatus,
}

impl SqlcGenReport {
    /// The one-line confirmation printed for this invocation.
    pub fn summary(&self) -> String {
        format!("sqlc: generated {}", self.output_dir.display())
    }
}
