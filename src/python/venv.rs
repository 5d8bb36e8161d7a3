use crate::config::validate_env_name;
use crate::core::error::{Result, VenvMgrError};
use crate::core::{remove_path, ProcessExecutor};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Set by Python activation scripts; a non-empty value marks the active env.
pub const ACTIVE_ENV_VAR: &str = "VIRTUAL_ENV";

/// The environment an invocation acts on: either the process-scope active
/// env or one named with `-e` under the envs root.
#[derive(Debug, Clone)]
pub enum TargetEnv {
    Active(PathBuf),
    Named { name: String, path: PathBuf },
}

impl TargetEnv {
    pub fn path(&self) -> &Path {
        match self {
            TargetEnv::Active(path) => path,
            TargetEnv::Named { path, .. } => path,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TargetEnv::Active(path) => format!("active env at {}", path.display()),
            TargetEnv::Named { name, .. } => format!("env `{}`", name),
        }
    }
}

pub struct VenvManager {
    envs_dir: PathBuf,
}

impl VenvManager {
    pub fn new(envs_dir: PathBuf) -> Self {
        Self { envs_dir }
    }

    pub fn envs_dir(&self) -> &Path {
        &self.envs_dir
    }

    pub fn env_path(&self, name: &str) -> PathBuf {
        self.envs_dir.join(name)
    }

    /// An environment exists when its directory holds a Python interpreter,
    /// not merely when the directory is present.
    pub fn env_exists(&self, name: &str) -> bool {
        venv_python_path(&self.env_path(name)).exists()
    }

    /// Resolve the target environment for a command. The named-env existence
    /// check runs before anything else so that a bad `-e` fails with no
    /// other side effect.
    pub fn resolve_target(&self, env_name: Option<&str>) -> Result<TargetEnv> {
        if let Some(name) = env_name {
            if !self.env_exists(name) {
                return Err(VenvMgrError::EnvNotFound(name.to_string()));
            }
            return Ok(TargetEnv::Named {
                name: name.to_string(),
                path: self.env_path(name),
            });
        }

        match std::env::var(ACTIVE_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Ok(TargetEnv::Active(PathBuf::from(path))),
            _ => Err(VenvMgrError::NoActiveEnv),
        }
    }

    pub async fn create_env(&self, name: &str, python_bin: &str) -> Result<PathBuf> {
        validate_env_name(name)?;

        if self.env_exists(name) {
            return Err(VenvMgrError::EnvAlreadyExists(name.to_string()));
        }

        if !ProcessExecutor::check_command_exists(python_bin) {
            return Err(VenvMgrError::PythonEnv(format!(
                "`{}` is not installed or not on PATH",
                python_bin
            )));
        }

        let env_path = self.env_path(name);

        println!(
            "{} Creating virtual env `{}`...",
            "⚙".blue().bold(),
            name.cyan()
        );

        let success = ProcessExecutor::execute_with_status(
            python_bin,
            &["-m", "venv", env_path.to_str().unwrap()],
        )
        .await?;

        if !success {
            // A failed run can leave a half-built directory behind.
            remove_path(&env_path).await?;
            return Err(VenvMgrError::PythonEnv(format!(
                "Failed to create virtual env `{}` with {}",
                name, python_bin
            )));
        }

        println!(
            "{} Virtual env created at {}",
            "✓".green().bold(),
            env_path.display().to_string().yellow()
        );

        Ok(env_path)
    }

    pub async fn remove_env(&self, name: &str) -> Result<()> {
        if !self.env_exists(name) {
            return Err(VenvMgrError::EnvNotFound(name.to_string()));
        }

        remove_path(&self.env_path(name)).await
    }

    /// Names of environments under the root, sorted.
    pub fn list_envs(&self) -> Result<Vec<String>> {
        if !self.envs_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.envs_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if self.env_exists(name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

pub fn venv_bin_dir(env_path: &Path) -> PathBuf {
    if cfg!(windows) {
        env_path.join("Scripts")
    } else {
        env_path.join("bin")
    }
}

pub fn venv_python_path(env_path: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_bin_dir(env_path).join("python.exe")
    } else {
        venv_bin_dir(env_path).join("python")
    }
}
