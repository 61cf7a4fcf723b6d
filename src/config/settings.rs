use std::path::{Path, PathBuf};

use crate::core::models::environment::EnvironmentName;

/// Directory holding the `env.<name>.json` files, relative to the
/// working directory.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment used when `TEST_ENV` is unset.
pub const DEFAULT_ENV: &str = "dev";

/// Glob the test runner uses to discover spec files.
pub const DEFAULT_SPEC_PATTERN: &str = "tests/ui/e2e/**/*.cy.js";

/// Process-environment variables read during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunVar {
    /// Selects which `env.<name>.json` file to load.
    TestEnv,
    /// Overrides `baseUrl`.
    LoginUrl,
    /// Overrides `username`.
    Username,
    /// Overrides `password`.
    Password,
}

impl RunVar {
    /// Returns the canonical environment variable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestEnv => "TEST_ENV",
            Self::LoginUrl => "CYPRESS_LOGIN_URL",
            Self::Username => "CYPRESS_USERNAME",
            Self::Password => "CYPRESS_PASSWORD",
        }
    }

    /// The three secret variables, in overlay order.
    pub const SECRETS: [RunVar; 3] = [Self::LoginUrl, Self::Username, Self::Password];
}

/// Settings that locate configuration for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub config_dir: PathBuf,
    pub default_env: String,
    pub spec_pattern: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            default_env: DEFAULT_ENV.to_string(),
            spec_pattern: DEFAULT_SPEC_PATTERN.to_string(),
        }
    }
}

impl ResolverSettings {
    /// Use `dir` instead of the default config directory.
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Path of the file for `env`: `<config_dir>/env.<name>.json`.
    pub fn env_file_path(&self, env: &EnvironmentName) -> PathBuf {
        self.config_dir.join(format!("env.{}.json", env.as_str()))
    }
}
