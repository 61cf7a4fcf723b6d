pub mod config_resolver;
pub mod layer_merger;
