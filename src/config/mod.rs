pub mod global;
pub mod schema;
pub mod validation;

pub use global::{GlobalConfigManager, HOME_ENV_VAR};
pub use schema::GlobalConfig;
pub use validation::validate_env_name;
