use crate::core::error::{Result, VenvMgrError};
use crate::python::venv::venv_bin_dir;
use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Runs commands with a virtual environment activated (bin dir prepended to
/// PATH, VIRTUAL_ENV exported).
pub struct VenvExecutor {
    env_path: PathBuf,
}

impl VenvExecutor {
    pub fn new(env_path: PathBuf) -> Self {
        Self { env_path }
    }

    fn bin_dir(&self) -> PathBuf {
        venv_bin_dir(&self.env_path)
    }

    fn get_executable_path(&self, command: &str) -> PathBuf {
        let bin_dir = self.bin_dir();
        if cfg!(windows) {
            bin_dir.join(format!("{}.exe", command))
        } else {
            bin_dir.join(command)
        }
    }

    fn activated_path(&self) -> String {
        let original_path = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir().display(), original_path)
    }

    /// Run a command from the environment with full stdio passthrough.
    pub async fn run_interactive(&self, command: &str, args: &[String]) -> Result<i32> {
        let executable = self.get_executable_path(command);

        if !executable.exists() {
            return Err(VenvMgrError::PythonEnv(format!(
                "Command '{}' not found in virtual env. Is it installed?",
                command
            )));
        }

        let status = Command::new(&executable)
            .args(args)
            .env("VIRTUAL_ENV", &self.env_path)
            .env("PATH", self.activated_path())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                VenvMgrError::CommandFailed(format!("Failed to execute {}: {}", command, e))
            })?;

        Ok(status.code().unwrap_or(1))
    }

    /// Spawn an interactive shell with the environment activated.
    pub async fn spawn_shell(&self) -> Result<i32> {
        let shell = if cfg!(windows) {
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
        } else {
            std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string())
        };

        println!("{} Entering virtual env shell", "→".blue().bold());
        println!("  Type {} to exit", "exit".yellow());
        println!();

        let status = Command::new(&shell)
            .env("VIRTUAL_ENV", &self.env_path)
            .env("PATH", self.activated_path())
            .env("PS1", "(venv) $ ")
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| VenvMgrError::CommandFailed(format!("Failed to spawn shell: {}", e)))?;

        Ok(status.code().unwrap_or(0))
    }
}
