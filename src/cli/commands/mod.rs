pub mod doctor;
pub mod env;
pub mod install;
pub mod list;
pub mod run;
pub mod shell;
pub mod uninstall;

use crate::config::GlobalConfigManager;
use crate::core::error::Result;
use crate::python::VenvManager;

/// Load global config and open the manager for the envs root.
pub(crate) async fn open_venv_manager() -> Result<(GlobalConfigManager, VenvManager)> {
    let global_mgr = GlobalConfigManager::new()?;
    let config = global_mgr.load().await?;
    let envs_dir = global_mgr.get_envs_dir(&config);
    Ok((global_mgr, VenvManager::new(envs_dir)))
}
