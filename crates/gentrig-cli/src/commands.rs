//! CLI command implementations.

use anyhow::Result;
use gentrig_core::{EnumGenConfig, EnumGenTrigger, SqlcGenConfig, SqlcGenTrigger};
use std::path::PathBuf;
use tracing::debug;

pub async fn enum_gen(source_file: String) -> Result<()> {
    let config = EnumGenConfig::new(source_file)?;
    let work_dir = std::env::current_dir()?;
    debug!(dir = %work_dir.display(), "Triggering go-enum");

    let report = EnumGenTrigger::new().run(&config, &work_dir).await?;
    // A nonzero generator exit is logged by the trigger and left on
    // report.status; it does not fail the command.
    println!("{}", report.summary());
    Ok(())
}

pub async fn sqlc(project_root: PathBuf) -> Result<()> {
    let config = SqlcGenConfig::new(project_root)?;
    let work_dir = std::env::current_dir()?;
    debug!(dir = %work_dir.display(), "Triggering sqlc");

    let report = SqlcGenTrigger::new().run(&config, &work_dir).await?;
    println!("{}", report.summary());
    Ok(())
}
