pub mod environment;
pub mod sources;
