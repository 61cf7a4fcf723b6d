use std::path::Path;

use crate::core::errors::Result;

/// Port for reading per-environment configuration files.
///
/// Implementations live in `adapters::sources`. The resolver only
/// depends on this trait, so tests can serve files from memory.
pub trait ConfigSource {
    /// Read the file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other read
    /// failure is an error.
    fn read(&self, path: &Path) -> Result<Option<String>>;
}
