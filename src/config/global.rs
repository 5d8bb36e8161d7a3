use crate::config::schema::GlobalConfig;
use crate::core::error::Result;
use crate::core::resolve_path;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";
const ENVS_DIR_NAME: &str = "envs";

/// Overrides the config/data root entirely (used by tests and by users who
/// want a self-contained installation).
pub const HOME_ENV_VAR: &str = "VENV_MGR_HOME";

pub struct GlobalConfigManager {
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        let config_path = config_dir.join(GLOBAL_CONFIG_FILE);

        Ok(Self {
            config_dir,
            config_path,
        })
    }

    fn get_config_dir() -> Result<PathBuf> {
        if let Ok(home) = std::env::var(HOME_ENV_VAR) {
            if !home.trim().is_empty() {
                return Ok(PathBuf::from(home));
            }
        }

        if let Some(proj_dirs) = ProjectDirs::from("com", "venv-mgr", "venv-mgr") {
            Ok(proj_dirs.config_dir().to_path_buf())
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            Ok(PathBuf::from(home).join(".venv-mgr"))
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub async fn load(&self) -> Result<GlobalConfig> {
        if !self.config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: GlobalConfig = toml::from_str(&content)?;
        tracing::debug!("loaded config from {}", self.config_path.display());
        Ok(config)
    }

    pub async fn save(&self, config: &GlobalConfig) -> Result<()> {
        fs::create_dir_all(&self.config_dir).await?;
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await?;
        Ok(())
    }

    pub async fn ensure_initialized(&self) -> Result<GlobalConfig> {
        if !self.config_path.exists() {
            let config = GlobalConfig::default();
            self.save(&config).await?;
            Ok(config)
        } else {
            self.load().await
        }
    }

    /// Directory holding named virtual environments. Honors the config
    /// override; relative overrides resolve against the config dir.
    pub fn get_envs_dir(&self, config: &GlobalConfig) -> PathBuf {
        match config.envs.dir.as_deref() {
            Some(dir) => resolve_path(&self.config_dir, dir),
            None => self.config_dir.join(ENVS_DIR_NAME),
        }
    }
}
