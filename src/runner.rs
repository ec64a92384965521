//! External runner invocation.
//!
//! The runner is an opaque, pre-installed collaborator (the Streamlit CLI by
//! default). We spawn it with inherited stdio in the resolved working
//! directory, block until it exits, and mirror its exit code so scripts
//! wrapping this launcher see the application's own status.

use crate::errors::{LauncherError, Result, EXIT_ERROR};
use std::path::Path;
use tracing::info;

/// A runner command line split into program and leading arguments; the
/// target filename is appended at invocation time.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RunnerCommand {
    /// Parse the configured runner string ("streamlit run",
    /// "python -m streamlit run", ...) with shell-style word splitting.
    pub fn parse(runner: &str) -> Result<Self> {
        let words = shlex::split(runner)
            .ok_or_else(|| LauncherError::Config(format!("Unparseable runner: {:?}", runner)))?;
        let mut iter = words.into_iter();
        let program = iter
            .next()
            .ok_or_else(|| LauncherError::Config("Empty runner command".to_string()))?;
        Ok(Self {
            program,
            args: iter.collect(),
        })
    }

    /// Spawn `<program> <args..> <target>` in `workdir` and wait for it.
    ///
    /// Returns the child's exit code. On unix, a signal death maps to the
    /// shell convention `128 + signo`. Interrupts (Ctrl-C) are delivered to
    /// the whole foreground process group, so the child receives them
    /// directly and we simply keep waiting until it is gone.
    pub async fn invoke(&self, workdir: &Path, target: &str) -> Result<i32> {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args).arg(target).current_dir(workdir);

        info!(program = %self.program, target = %target, "starting runner");

        let mut child = cmd.spawn().map_err(|e| LauncherError::RunnerSpawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        let status = child.wait().await.map_err(|e| LauncherError::RunnerSpawn {
            program: self.program.clone(),
            message: format!("wait failed: {}", e),
        })?;

        Ok(exit_code_of(status))
    }
}

fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    EXIT_ERROR as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let cmd = RunnerCommand::parse("streamlit run").unwrap();
        assert_eq!(cmd.program, "streamlit");
        assert_eq!(cmd.args, vec!["run"]);
    }

    #[test]
    fn test_parse_module_invocation() {
        let cmd = RunnerCommand::parse("python -m streamlit run").unwrap();
        assert_eq!(cmd.program, "python");
        assert_eq!(cmd.args, vec!["-m", "streamlit", "run"]);
    }

    #[test]
    fn test_parse_quoted_path() {
        let cmd = RunnerCommand::parse(r#""/opt/my tools/streamlit" run"#).unwrap();
        assert_eq!(cmd.program, "/opt/my tools/streamlit");
        assert_eq!(cmd.args, vec!["run"]);
    }

    #[test]
    fn test_parse_empty_is_config_error() {
        let err = RunnerCommand::parse("").unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }

    #[test]
    fn test_parse_unbalanced_quote_is_config_error() {
        let err = RunnerCommand::parse(r#"streamlit "run"#).unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }

    #[tokio::test]
    async fn test_invoke_mirrors_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = RunnerCommand::parse("sh -c").unwrap();
        // `sh -c "exit 7"` — the "target" slot carries the script here.
        let code = cmd.invoke(dir.path(), "exit 7").await.unwrap();
        assert_eq!(code, 7);
    }

    #[tokio::test]
    async fn test_invoke_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = RunnerCommand::parse("definitely-not-a-real-binary-xyz run").unwrap();
        let err = cmd.invoke(dir.path(), "app.py").await.unwrap_err();
        assert!(matches!(err, LauncherError::RunnerSpawn { .. }));
    }

    #[tokio::test]
    async fn test_invoke_runs_in_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        let cmd = RunnerCommand::parse("sh -c").unwrap();
        let code = cmd
            .invoke(&canonical, &format!("test \"$(pwd)\" = \"{}\"", canonical.display()))
            .await
            .unwrap();
        assert_eq!(code, 0, "runner should inherit the resolved working directory");
    }
}
