use crate::core::error::{Result, VenvMgrError};
use crate::python::{Manifest, PipManager};
use colored::Colorize;
use dialoguer::Confirm;
use std::env;

pub async fn execute(yes: bool, env_name: Option<String>, packages: Vec<String>) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    // A bad `-e` must fail before the manifest lookup or any mutation.
    let target = venv_mgr.resolve_target(env_name.as_deref())?;

    let packages = if packages.is_empty() {
        let current_dir = env::current_dir()?;
        let manifest = Manifest::locate(&current_dir)?;
        println!(
            "{} Using requirements from {}",
            "ℹ".blue().bold(),
            manifest.path.display().to_string().yellow()
        );
        manifest.package_names()
    } else {
        packages
    };

    if packages.is_empty() {
        println!("{} Nothing to uninstall", "ℹ".blue().bold());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Uninstall {} package(s) from {}?",
                packages.len(),
                target.describe()
            ))
            .default(false)
            .interact()
            .map_err(|e| VenvMgrError::CommandFailed(format!("Prompt failed: {}", e)))?;

        if !confirmed {
            return Err(VenvMgrError::Aborted);
        }
    }

    let pip = PipManager::new(target.path().to_path_buf());
    pip.uninstall(&packages).await?;

    println!(
        "{} Uninstalled {} package(s) from {}",
        "✓".green().bold(),
        packages.len().to_string().cyan(),
        target.describe()
    );

    Ok(())
}
