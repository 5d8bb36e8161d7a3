pub mod error;
pub mod fs;
pub mod path;
pub mod process;

pub use error::{Result, VenvMgrError};
pub use fs::{ensure_dir_exists, remove_path};
pub use path::resolve_path;
pub use process::ProcessExecutor;
