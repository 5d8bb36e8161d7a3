use crate::core::error::Result;
use crate::python::VenvExecutor;

pub async fn execute(env_name: Option<String>, command: String, args: Vec<String>) -> Result<()> {
    let (_global_mgr, venv_mgr) = super::open_venv_manager().await?;

    let target = venv_mgr.resolve_target(env_name.as_deref())?;
    let executor = VenvExecutor::new(target.path().to_path_buf());

    let exit_code = executor.run_interactive(&command, &args).await?;
    std::process::exit(exit_code);
}
