//! The launch sequence.
//!
//! Linear, no cycles:
//! set encoding → set title → banner → change dir → check file →
//! { run and mirror exit code | report, wait for ack, exit non-zero }.

use crate::config::Config;
use crate::console;
use crate::errors::{LauncherError, EXIT_ERROR};
use crate::runner::RunnerCommand;
use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Run the full launch sequence. Returns the process exit code: the child's
/// own code after a successful hand-off, or `EXIT_ERROR` after an
/// acknowledged missing-target report.
pub async fn launch(config: &Config, interactive: bool, quiet: bool) -> Result<i32> {
    console::set_utf8_output();
    console::set_title(&config.title);
    if !quiet {
        console::print_banner(&config.title, &config.target);
    }

    let workdir = resolve_workdir(&config.workdir)?;
    std::env::set_current_dir(&workdir)
        .with_context(|| format!("Failed to change into {}", workdir.display()))?;
    debug!(workdir = %workdir.display(), "working directory set");

    // The same resolved path backs both the existence check and the
    // invocation, so the two cannot diverge.
    let target_path = workdir.join(&config.target);
    if !target_path.is_file() {
        return report_missing(config, &workdir, interactive);
    }

    if !quiet {
        println!(
            "{} {} found, starting {}...",
            "✓".green(),
            config.target.bold(),
            config.runner
        );
    }
    info!(target = %target_path.display(), "target present, handing off");

    let runner = RunnerCommand::parse(&config.runner)?;
    let code = runner.invoke(&workdir, &config.target).await?;
    info!(code, "runner exited");
    Ok(code)
}

/// Check the configured working directory exists before changing into it,
/// so the operator gets a message symmetric with the missing-file branch
/// instead of a raw OS error from the cd itself.
fn resolve_workdir(workdir: &str) -> Result<PathBuf> {
    let dir = Path::new(workdir);
    if !dir.is_dir() {
        return Err(LauncherError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }
    dir.canonicalize()
        .with_context(|| format!("Failed to resolve {}", workdir))
}

fn report_missing(config: &Config, workdir: &Path, interactive: bool) -> Result<i32> {
    let err = LauncherError::TargetMissing {
        file: config.target.clone(),
        dir: workdir.to_path_buf(),
    };
    if !interactive {
        return Err(err.into());
    }
    eprintln!("{} {}", "✗".red(), err.to_string().red());
    eprintln!(
        "  Expected at: {}",
        workdir.join(&config.target).display().to_string().yellow()
    );
    eprintln!("  Place the file there and run the launcher again.");
    console::read_ack();
    Ok(EXIT_ERROR as i32)
}
