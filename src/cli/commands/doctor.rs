use crate::config::GlobalConfigManager;
use crate::core::{error::Result, ProcessExecutor};
use crate::python::venv::ACTIVE_ENV_VAR;
use crate::python::VenvManager;
use colored::Colorize;

pub async fn execute() -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let mut all_ok = true;

    let global_mgr = GlobalConfigManager::new()?;
    let config = global_mgr.load().await?;

    // Check the interpreter used for env creation
    print!("Checking {}... ", config.python.bin);
    if ProcessExecutor::check_command_exists(&config.python.bin) {
        let version =
            ProcessExecutor::execute_with_output(&config.python.bin, &["--version"]).await;
        match version {
            Ok(v) => println!("{} ({})", "✓".green(), v.trim().yellow()),
            Err(_) => println!("{}", "✓".green()),
        }
    } else {
        println!("{}", "✗ Not found".red());
        println!("  Install Python or set python.bin in config.toml");
        all_ok = false;
    }

    // Check config
    print!("Checking config... ");
    if global_mgr.config_path().exists() {
        println!(
            "{} ({})",
            "✓".green(),
            global_mgr.config_path().display().to_string().yellow()
        );
    } else {
        println!("{}", "○ Using defaults".yellow());
    }

    // Check envs root
    print!("Checking envs... ");
    let envs_dir = global_mgr.get_envs_dir(&config);
    let venv_mgr = VenvManager::new(envs_dir.clone());
    let envs = venv_mgr.list_envs()?;
    if envs.is_empty() {
        println!("{}", "○ No virtual envs yet".yellow());
        println!("  Run {} to create one", "venv-mgr env new <name>".cyan());
    } else {
        println!(
            "{} {} env(s) under {}",
            "✓".green(),
            envs.len(),
            envs_dir.display().to_string().yellow()
        );
        for name in &envs {
            println!("  - {}", name.cyan());
        }
    }

    // Check active env
    print!("Checking active env... ");
    match std::env::var(ACTIVE_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => println!("{} ({})", "✓".green(), path.yellow()),
        _ => println!("{}", "○ None active".yellow()),
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}
