use crate::core::error::Result;
use crate::python::{Manifest, PipManager};
use colored::Colorize;
use std::env;

pub async fn execute(env_name: Option<String>, packages: Vec<String>) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    let target = venv_mgr.resolve_target(env_name.as_deref())?;

    let requirements = if packages.is_empty() {
        let current_dir = env::current_dir()?;
        let manifest = Manifest::locate(&current_dir)?;
        println!(
            "{} Using requirements from {}",
            "ℹ".blue().bold(),
            manifest.path.display().to_string().yellow()
        );
        manifest.requirements().to_vec()
    } else {
        packages
    };

    if requirements.is_empty() {
        println!("{} Nothing to install", "ℹ".blue().bold());
        return Ok(());
    }

    println!(
        "{} Installing {} package(s) into {}: {}",
        "⚙".blue().bold(),
        requirements.len().to_string().cyan(),
        target.describe(),
        requirements.join(" ").yellow()
    );

    let pip = PipManager::new(target.path().to_path_buf());
    pip.install(&requirements).await?;

    println!(
        "{} Packages installed into {}",
        "✓".green().bold(),
        target.describe()
    );

    Ok(())
}
