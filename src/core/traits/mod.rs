pub mod config_source;
pub mod env_source;
