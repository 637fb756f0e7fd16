//! Trigger for the go-enum generator.
//!
//! Runs `go tool github.com/abice/go-enum` against the source file named
//! in the configuration and reports where the generated file lands. The
//! generator discovers its input through the `GOFILE` variable in its own
//! environment, following the go:generate convention.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::EnumGenConfig;
use crate::error::{TriggerError, TriggerResult};

/// Suffix the generator appends to the source file name.
pub const OUTPUT_SUFFIX: &str = ".enum.gen.go";

/// Module path of the generator tool.
const GO_ENUM_TOOL: &str = "github.com/abice/go-enum";

/// Service wrapping one go-enum invocation.
pub struct EnumGenTrigger {
    /// Path to the go binary
    go_bin: String,
}

impl Default for EnumGenTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumGenTrigger {
    pub fn new() -> Self {
        let go_bin = std::env::var("GENTRIG_GO_BIN").unwrap_or_else(|_| "go".to_string());
        Self { go_bin }
    }

    /// Use a specific binary instead of the `GENTRIG_GO_BIN` / `go` default.
    pub fn with_binary(go_bin: impl Into<String>) -> Self {
        Self { go_bin: go_bin.into() }
    }

    /// Arguments passed to the go binary. The flag set is fixed: marshal
    /// code, name accessors, value accessors, SQL driver bindings.
    fn args() -> [&'static str; 8] {
        [
            "tool",
            GO_ENUM_TOOL,
            "--marshal",
            "--names",
            "--values",
            "--sql",
            "--output-suffix",
            OUTPUT_SUFFIX,
        ]
    }

    /// Run the generator in `work_dir` and report the expected output path.
    ///
    /// The child's stdout is suppressed; stderr passes through. The exit
    /// status is recorded on the report rather than turned into an error,
    /// so the caller decides whether a failed generation is fatal.
    pub async fn run(
        &self,
        config: &EnumGenConfig,
        work_dir: &Path,
    ) -> TriggerResult<EnumGenReport> {
        info!(source = %config.source_file, "Running go-enum");
        debug!(go_bin = %self.go_bin, args = ?Self::args(), "Invoking generator");

        let status = Command::new(&self.go_bin)
            .args(Self::args())
            .env("GOFILE", &config.source_file)
            .current_dir(work_dir)
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| TriggerError::Spawn(e.to_string()))?;

        if !status.success() {
            warn!(%status, "go-enum exited with failure");
        }

        let output_path = work_dir.join(format!("{}{}", config.source_file, OUTPUT_SUFFIX));
        Ok(EnumGenReport {
            output_path,
            status,
        })
    }
}

/// Outcome of one go-enum invocation.
#[derive(Debug)]
pub struct EnumGenReport {
    /// Where the generated file is expected to be.
    pub output_path: PathBuf,
    /// Exit status of the generator.
    pub status: ExitStatus,
}

impl EnumGenReport {
    /// The one-line confirmation printed for this invocation.
    pub fn summary(&self) -> String {
        format!("go-enum: generated {}", self.output_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn write_fake_go(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("go");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_fixed_flag_set() {
        assert_eq!(
            EnumGenTrigger::args(),
            [
                "tool",
                "github.com/abice/go-enum",
                "--marshal",
                "--names",
                "--values",
                "--sql",
                "--output-suffix",
                ".enum.gen.go",
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_records_args_and_gofile() {
        let tmp = tempfile::tempdir().unwrap();
        let capture = tmp.path().join("capture.txt");
        let go = write_fake_go(
            tmp.path(),
            &format!("echo \"$@\" > {c}\necho \"$GOFILE\" >> {c}", c = capture.display()),
        );

        let config = EnumGenConfig::new("foo.go").unwrap();
        let trigger = EnumGenTrigger::with_binary(go.to_str().unwrap());
        let report = trigger.run(&config, tmp.path()).await.unwrap();

        assert!(report.status.success());
        let recorded = fs::read_to_string(&capture).unwrap();
        let mut lines = recorded.lines();
        assert_eq!(
            lines.next().unwrap(),
            "tool github.com/abice/go-enum --marshal --names --values --sql \
             --output-suffix .enum.gen.go"
        );
        assert_eq!(lines.next().unwrap(), "foo.go");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_summary_names_output_in_work_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let go = write_fake_go(tmp.path(), "exit 0");

        let config = EnumGenConfig::new("foo.go").unwrap();
        let trigger = EnumGenTrigger::with_binary(go.to_str().unwrap());
        let report = trigger.run(&config, tmp.path()).await.unwrap();

        assert_eq!(
            report.summary(),
            format!("go-enum: generated {}/foo.go.enum.gen.go", tmp.path().display())
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generator_failure_is_reported_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let go = write_fake_go(tmp.path(), "exit 3");

        let config = EnumGenConfig::new("foo.go").unwrap();
        let trigger = EnumGenTrigger::with_binary(go.to_str().unwrap());
        let report = trigger.run(&config, tmp.path()).await.unwrap();

        assert!(!report.status.success());
        assert_eq!(report.status.code(), Some(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_repeated_runs_report_same_path() {
        let tmp = tempfile::tempdir().unwrap();
        let go = write_fake_go(tmp.path(), "exit 0");

        let config = EnumGenConfig::new("foo.go").unwrap();
        let trigger = EnumGenTrigger::with_binary(go.to_str().unwrap());
        let first = trigger.run(&config, tmp.path()).await.unwrap();
        let second = trigger.run(&config, tmp.path()).await.unwrap();

        assert_eq!(first.output_path, second.output_path);
    }

    #[tokio::test]
    async fn test_missing_binary_is_a_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = EnumGenConfig::new("foo.go").unwrap();
        let trigger = EnumGenTrigger::with_binary(tmp.path().join("no-such-go").display().to_string());

        let err = trigger.run(&config, tmp.path()).await.unwrap_err();
        assert!(matches!(err, TriggerError::Spawn(_)));
    }
}
