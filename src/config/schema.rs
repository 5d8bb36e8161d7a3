use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub python: PythonConfig,
    #[serde(default)]
    pub envs: EnvsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PythonConfig {
    /// Interpreter used to create new virtual environments.
    #[serde(default = "default_python_bin")]
    pub bin: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvsConfig {
    /// Override for the directory holding named environments.
    /// Relative values resolve against the config directory.
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_python_bin() -> String {
    "python3".to_string()
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            bin: default_python_bin(),
        }
    }
}

impl Default for EnvsConfig {
    fn default() -> Self {
        Self { dir: None }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            python: PythonConfig::default(),
            envs: EnvsConfig::default(),
        }
    }
}
