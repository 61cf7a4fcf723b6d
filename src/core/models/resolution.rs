use std::fmt;
use std::path::{Path, PathBuf};

use super::file_config::FileConfig;
use super::run_context::RunContext;

/// Outcome of attempting to load the environment file.
///
/// A missing file is a valid, intentionally empty layer. Parse and
/// validation failures are reported through `RunConfigError` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FileLayer {
    Loaded { path: PathBuf, config: FileConfig },
    Missing { path: PathBuf },
}

impl FileLayer {
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded { path, .. } | Self::Missing { path } => path,
        }
    }

    /// The layer's values; empty when the file was missing.
    pub fn config(&self) -> FileConfig {
        match self {
            Self::Loaded { config, .. } => config.clone(),
            Self::Missing { .. } => FileConfig::default(),
        }
    }
}

/// Non-fatal conditions surfaced during resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveWarning {
    MissingEnvFile { path: PathBuf },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnvFile { path } => {
                write!(f, "Missing environment config file: {}", path.display())
            }
        }
    }
}

/// The finalized run context plus how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub context: RunContext,
    pub file: FileLayer,
    pub warnings: Vec<ResolveWarning>,
}
