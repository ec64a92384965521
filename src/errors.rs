use std::path::PathBuf;
use thiserror::Error;

/// The central error type for the launcher.
///
/// Every failure here is terminal for the current invocation: the operator
/// fixes the environment and re-runs. No variant carries retry semantics.
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Working directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Target file '{file}' not found in {dir}")]
    TargetMissing { file: String, dir: PathBuf },

    #[error("Failed to start runner '{program}': {message}")]
    RunnerSpawn { program: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LauncherError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_SPAWN_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<LauncherError>() {
        return match err {
            LauncherError::Config(_) => EXIT_CONFIG_ERROR,
            LauncherError::RunnerSpawn { .. } => EXIT_SPAWN_ERROR,
            LauncherError::DirectoryNotFound { .. } | LauncherError::TargetMissing { .. } => {
                EXIT_ERROR
            }
        };
    }

    // Fallback string matching when the error lost its type through a
    // context chain or came from a third-party crate.
    let msg = e.to_string().to_lowercase();
    if msg.contains("config") {
        return EXIT_CONFIG_ERROR;
    } else if msg.contains("failed to start") || msg.contains("spawn") {
        return EXIT_SPAWN_ERROR;
    }

    EXIT_ERROR
}
