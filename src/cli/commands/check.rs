use crate::cli::{Cli, context, output};
use crate::core::errors::{Result, RunConfigError};
use crate::core::models::resolution::FileLayer;

/// Execute the `runcfg check` command.
///
/// Resolves the configuration and reports which file was loaded, which
/// secret variables override it, and whether a base URL is available.
pub fn execute(cli: &Cli, strict: bool) -> Result<()> {
    let (inputs, resolution) = context::resolve(cli)?;
    let ctx = &resolution.context;

    output::header(&format!("🔍 runcfg check: {}", inputs.env_name));

    if let FileLayer::Loaded { path, config } = &resolution.file {
        output::success(&format!(
            "Loaded {} ({} key(s))",
            path.display(),
            config.values.len()
        ));
    }

    let overrides = inputs.secrets.present_vars();
    if overrides.is_empty() {
        output::success("No secret overrides set");
    } else {
        let names: Vec<&str> = overrides.iter().map(|v| v.as_str()).collect();
        output::success(&format!("Secret overrides: {}", names.join(", ")));
    }

    match ctx.base_url() {
        Some(url) => output::success(&format!("Base URL: {url}")),
        None if strict => {
            return Err(RunConfigError::BaseUrlUnresolved {
                env: inputs.env_name.to_string(),
                path: resolution.file.path().to_path_buf(),
            });
        }
        None => output::warning("No base URL resolved; tests that navigate will fail"),
    }

    output::success(&format!("{} key(s) resolved", ctx.env.len()));

    Ok(())
}
