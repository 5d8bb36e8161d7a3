use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenvMgrError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Virtual env named `{0}` does not exist.")]
    EnvNotFound(String),

    #[error("Virtual env named `{0}` already exists.")]
    EnvAlreadyExists(String),

    #[error("No virtual env is active. Pass `-e <name>` or activate one first.")]
    NoActiveEnv,

    #[error("Unable to locate a requirements file.")]
    RequirementsNotFound,

    #[error("Python environment error: {0}")]
    PythonEnv(String),

    #[error("Invalid env name: {0}")]
    InvalidEnvName(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Aborted.")]
    Aborted,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VenvMgrError>;
