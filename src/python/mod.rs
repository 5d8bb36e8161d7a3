pub mod executor;
pub mod pip;
pub mod requirements;
pub mod venv;

pub use executor::VenvExecutor;
pub use pip::PipManager;
pub use requirements::Manifest;
pub use venv::{TargetEnv, VenvManager};
