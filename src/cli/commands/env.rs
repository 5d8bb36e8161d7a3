use crate::core::error::{Result, VenvMgrError};
use crate::core::ensure_dir_exists;
use colored::Colorize;
use dialoguer::Confirm;

pub async fn new(name: String, python: Option<String>) -> Result<()> {
    let (global_mgr, venv_mgr) = super::open_venv_manager().await?;
    let config = global_mgr.ensure_initialized().await?;

    let python_bin = python.unwrap_or(config.python.bin);

    ensure_dir_exists(venv_mgr.envs_dir()).await?;
    venv_mgr.create_env(&name, &python_bin).await?;

    println!(
        "  Use {} to work inside it",
        format!("venv-mgr shell -e {}", name).cyan()
    );

    Ok(())
}

pub async fn list() -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    let envs = venv_mgr.list_envs()?;

    if envs.is_empty() {
        println!("{}", "No virtual envs found".yellow());
        println!(
            "Run {} to create one",
            "venv-mgr env new <name>".cyan()
        );
        return Ok(());
    }

    println!("{}", "Virtual envs:".bold());
    println!();

    for name in envs {
        println!("  {}", name.cyan());
    }

    Ok(())
}

pub async fn remove(yes: bool, name: String) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    if !venv_mgr.env_exists(&name) {
        return Err(VenvMgrError::EnvNotFound(name));
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete virtual env `{}`?", name))
            .default(false)
            .interact()
            .map_err(|e| VenvMgrError::CommandFailed(format!("Prompt failed: {}", e)))?;

        if !confirmed {
            return Err(VenvMgrError::Aborted);
        }
    }

    venv_mgr.remove_env(&name).await?;

    println!(
        "{} Removed virtual env `{}`",
        "✓".green().bold(),
        name.cyan()
    );

    Ok(())
}

pub async fn locate(name: String) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    if !venv_mgr.env_exists(&name) {
        return Err(VenvMgrError::EnvNotFound(name));
    }

    println!("{}", venv_mgr.env_path(&name).display());

    Ok(())
}
