//! Common utilities for integration tests

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Isolated home + working directory for one test. `VENV_MGR_HOME` keeps
/// config and envs inside the temp dir; `VIRTUAL_ENV` is cleared so an
/// activated env on the host cannot leak in.
pub struct TestContext {
    pub temp: TempDir,
    pub home: PathBuf,
    pub cwd: PathBuf,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let cwd = temp.path().join("work");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::create_dir_all(&cwd).unwrap();

        Self { temp, home, cwd }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_venv-mgr"));
        cmd.env("VENV_MGR_HOME", &self.home)
            .env_remove("VIRTUAL_ENV")
            .current_dir(&self.cwd);
        cmd
    }

    /// Same binary, wrapped for fluent `.assert()` checks.
    pub fn assert_cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_venv-mgr"));
        cmd.env("VENV_MGR_HOME", &self.home)
            .env_remove("VIRTUAL_ENV")
            .current_dir(&self.cwd);
        cmd
    }

    pub fn envs_dir(&self) -> PathBuf {
        self.home.join("envs")
    }

    /// Lay down a directory that passes the env-exists check without ever
    /// invoking it. Good enough for every code path that stops before pip.
    pub fn fake_env(&self, name: &str) -> PathBuf {
        let env_path = self.envs_dir().join(name);
        let bin = if cfg!(windows) {
            env_path.join("Scripts")
        } else {
            env_path.join("bin")
        };
        std::fs::create_dir_all(&bin).unwrap();
        let python = if cfg!(windows) {
            bin.join("python.exe")
        } else {
            bin.join("python")
        };
        std::fs::write(python, "").unwrap();
        env_path
    }

    pub fn write_requirements(&self, content: &str) {
        std::fs::write(self.cwd.join("requirements.txt"), content).unwrap();
    }

    pub fn has_python() -> bool {
        Command::new("python3")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
