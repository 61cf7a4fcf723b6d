pub mod environment;
pub mod file_config;
pub mod resolution;
pub mod run_context;
pub mod secret_overlay;
