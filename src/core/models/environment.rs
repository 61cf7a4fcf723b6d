use std::fmt;

use crate::config::settings::RunVar;
use crate::core::traits::env_source::EnvSource;

/// Identifier selecting which `env.<name>.json` file governs a run.
///
/// Any string is accepted; there is no allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Pick the environment for this run.
    ///
    /// Order: explicit `flag`, then `TEST_ENV`, then `default`.
    /// Empty values are treated as unset.
    pub fn select(flag: Option<&str>, env: &dyn EnvSource, default: &str) -> Self {
        let from_var = env.var(RunVar::TestEnv.as_str());
        let chosen = flag
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or(from_var.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| default.to_string());
        Self::new(chosen)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
