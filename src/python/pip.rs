use crate::core::error::{Result, VenvMgrError};
use crate::core::ProcessExecutor;
use crate::python::venv::venv_python_path;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Drives `python -m pip` inside a single environment.
pub struct PipManager {
    env_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
}

impl PipManager {
    pub fn new(env_path: PathBuf) -> Self {
        Self { env_path }
    }

    fn python_path(&self) -> Result<PathBuf> {
        let python = venv_python_path(&self.env_path);
        if !python.exists() {
            return Err(VenvMgrError::PythonEnv(format!(
                "No Python interpreter found in {}",
                self.env_path.display()
            )));
        }
        Ok(python)
    }

    /// Installed package names, queried fresh from pip and normalized.
    pub async fn installed_packages(&self) -> Result<BTreeSet<String>> {
        let python = self.python_path()?;

        let output = ProcessExecutor::execute_with_output(
            python.to_str().unwrap(),
            &["-m", "pip", "list", "--format", "json"],
        )
        .await?;

        parse_pip_list(&output)
    }

    pub async fn install(&self, requirements: &[String]) -> Result<()> {
        if requirements.is_empty() {
            return Ok(());
        }

        let python = self.python_path()?;

        let mut args: Vec<String> = vec!["-m".into(), "pip".into(), "install".into()];
        args.extend(requirements.iter().cloned());

        self.run_pip(&python, &args, "Installing packages").await
    }

    pub async fn uninstall(&self, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let python = self.python_path()?;

        // Confirmation already happened at the CLI layer.
        let mut args: Vec<String> = vec!["-m".into(), "pip".into(), "uninstall".into(), "-y".into()];
        args.extend(packages.iter().cloned());

        self.run_pip(&python, &args, "Uninstalling packages").await
    }

    async fn run_pip(&self, python: &Path, args: &[String], label: &str) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let args_ref: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        let output = ProcessExecutor::execute(python.to_str().unwrap(), &args_ref, None).await?;

        spinner.finish_and_clear();

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.is_empty() {
                eprintln!("{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
            return Err(VenvMgrError::PythonEnv(format!(
                "{} failed. See output above for details.",
                label
            )));
        }

        Ok(())
    }
}

fn parse_pip_list(json: &str) -> Result<BTreeSet<String>> {
    let entries: Vec<PipListEntry> = serde_json::from_str(json).map_err(|e| {
        VenvMgrError::PythonEnv(format!("Unexpected output from pip list: {}", e))
    })?;

    Ok(entries
        .into_iter()
        .map(|entry| normalize_package_name(&entry.name))
        .collect())
}

/// PEP 503 normalization: case-insensitive, runs of `-`, `_`, `.` collapse
/// to a single `-`.
pub fn normalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut prev_sep = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch == '.' {
            if !prev_sep {
                normalized.push('-');
            }
            prev_sep = true;
        } else {
            normalized.push(ch.to_ascii_lowercase());
            prev_sep = false;
        }
    }

    normalized
}
