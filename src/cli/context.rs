use std::path::{Path, PathBuf};

use crate::adapters::environment::process_env::ProcessEnv;
use crate::adapters::sources::fs_source::FsConfigSource;
use crate::cli::{Cli, output};
use crate::config::settings::ResolverSettings;
use crate::core::errors::{Result, RunConfigError};
use crate::core::models::environment::EnvironmentName;
use crate::core::models::resolution::Resolution;
use crate::core::models::run_context::RunContext;
use crate::core::models::secret_overlay::SecretOverlay;
use crate::core::services::config_resolver::{ConfigResolver, ResolveInputs};

/// Parse a `KEY=VALUE` definition from the command line.
pub fn parse_definition(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(RunConfigError::InvalidDefinition {
            raw: raw.to_string(),
        }),
    }
}

/// Settings for this invocation, with the config directory made absolute
/// so messages point at an unambiguous file.
pub fn settings(config_dir: &Path) -> ResolverSettings {
    let dir = std::path::absolute(config_dir).unwrap_or_else(|_| PathBuf::from(config_dir));
    ResolverSettings::default().with_config_dir(dir)
}

/// Gather this process's inputs and run one resolution pass.
///
/// Warnings are printed once here; fatal errors are returned to `main`.
pub fn resolve(cli: &Cli) -> Result<(ResolveInputs, Resolution)> {
    let settings = settings(&cli.config_dir);

    let inputs = ResolveInputs {
        env_name: EnvironmentName::select(cli.env.as_deref(), &ProcessEnv, &settings.default_env),
        secrets: SecretOverlay::from_env(&ProcessEnv),
    };

    let context = cli
        .define
        .iter()
        .fold(RunContext::new(settings.spec_pattern.clone()), |ctx, (key, value)| {
            ctx.define(key.clone(), value.clone())
        });

    let resolver = ConfigResolver::new(FsConfigSource, settings);
    let resolution = resolver.resolve(context, &inputs)?;

    for warning in &resolution.warnings {
        output::warning(&warning.to_string());
    }

    Ok((inputs, resolution))
}
