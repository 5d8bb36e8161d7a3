use crate::core::error::Result;
use crate::python::PipManager;
use colored::Colorize;

pub async fn execute(env_name: Option<String>) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    let target = venv_mgr.resolve_target(env_name.as_deref())?;
    let pip = PipManager::new(target.path().to_path_buf());
    let packages = pip.installed_packages().await?;

    if packages.is_empty() {
        println!(
            "{}",
            format!("No packages installed in {}", target.describe()).yellow()
        );
        return Ok(());
    }

    println!("{}", format!("Packages in {}:", target.describe()).bold());
    println!();

    for package in packages {
        println!("  {}", package.cyan());
    }

    Ok(())
}
