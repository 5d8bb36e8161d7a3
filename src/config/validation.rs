use crate::core::error::{Result, VenvMgrError};

pub fn validate_env_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(VenvMgrError::InvalidEnvName(
            "env name cannot be empty".to_string(),
        ));
    }

    if name.starts_with('-') {
        return Err(VenvMgrError::InvalidEnvName(
            "env name cannot start with '-'".to_string(),
        ));
    }

    if name.chars().any(|c| c == '/' || c == '\\') {
        return Err(VenvMgrError::InvalidEnvName(
            "env name must be a directory name (no path separators)".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(VenvMgrError::InvalidEnvName(
            "env name cannot be a relative path component".to_string(),
        ));
    }

    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-');
    if !valid {
        return Err(VenvMgrError::InvalidEnvName(
            "env name may only contain ASCII letters/digits and . _ -".to_string(),
        ));
    }

    Ok(())
}
