use std::path::Path;

use crate::config::settings::ResolverSettings;
use crate::core::errors::Result;
use crate::core::models::environment::EnvironmentName;
use crate::core::models::file_config::FileConfig;
use crate::core::models::resolution::{FileLayer, Resolution, ResolveWarning};
use crate::core::models::run_context::RunContext;
use crate::core::models::secret_overlay::SecretOverlay;
use crate::core::services::layer_merger::LayerMerger;
use crate::core::traits::config_source::ConfigSource;

/// Explicit inputs for one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveInputs {
    pub env_name: EnvironmentName,
    pub secrets: SecretOverlay,
}

/// Resolves the configuration of a test run.
///
/// Layers, lowest precedence first:
/// 1. whatever the run context already holds
/// 2. the `env.<name>.json` file (empty when missing)
/// 3. the secret overlay
pub struct ConfigResolver<S: ConfigSource> {
    pub source: S,
    pub settings: ResolverSettings,
}

impl<S: ConfigSource> ConfigResolver<S> {
    pub fn new(source: S, settings: ResolverSettings) -> Self {
        Self { source, settings }
    }

    /// Resolve `context` for the environment and secrets in `inputs`.
    ///
    /// A missing environment file only produces a warning. The base-URL
    /// slot is taken from the secrets, else from the file, else left
    /// unset.
    ///
    /// # Errors
    ///
    /// - `MalformedFile` if the file exists but is not a JSON object.
    /// - `MissingRequiredKey` if the file exists without `baseUrl`.
    /// - `Io` if the file exists but cannot be read.
    pub fn resolve(&self, context: RunContext, inputs: &ResolveInputs) -> Result<Resolution> {
        let path = self.settings.env_file_path(&inputs.env_name);
        tracing::debug!(env = %inputs.env_name, path = %path.display(), "resolving run configuration");

        let file = self.load_file_layer(&path)?;

        let mut warnings = Vec::new();
        if let FileLayer::Missing { path } = &file {
            tracing::warn!(path = %path.display(), "environment config file missing, continuing without it");
            warnings.push(ResolveWarning::MissingEnvFile { path: path.clone() });
        }

        let file_config = file.config();
        let secret_layer = inputs.secrets.to_layer();
        let env = LayerMerger::merge(&[&context.env, &file_config.values, &secret_layer]);

        let base_url = inputs
            .secrets
            .base_url
            .clone()
            .or_else(|| file_config.base_url().map(str::to_string));

        tracing::debug!(
            keys = env.len(),
            secrets = inputs.secrets.present_vars().len(),
            base_url_set = base_url.is_some(),
            "run configuration resolved"
        );

        Ok(Resolution {
            context: RunContext {
                base_url,
                env,
                spec_pattern: context.spec_pattern,
            },
            file,
            warnings,
        })
    }

    /// Load the environment file at `path` as a tagged layer.
    pub fn load_file_layer(&self, path: &Path) -> Result<FileLayer> {
        let Some(content) = self.source.read(path)? else {
            return Ok(FileLayer::Missing {
                path: path.to_path_buf(),
            });
        };

        let config = FileConfig::parse(path, &content)?;
        Ok(FileLayer::Loaded {
            path: path.to_path_buf(),
            config,
        })
    }
}
