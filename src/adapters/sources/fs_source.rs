use std::path::Path;

use crate::core::errors::Result;
use crate::core::traits::config_source::ConfigSource;

/// Reads environment files from the local file system.
pub struct FsConfigSource;

impl ConfigSource for FsConfigSource {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(content))
    }
}
