use crate::cli::commands::resolve::display_value;
use crate::cli::{Cli, context};
use crate::core::errors::{Result, RunConfigError};

/// Execute the `runcfg get <KEY>` command.
pub fn execute(cli: &Cli, key: &str) -> Result<()> {
    let (_, resolution) = context::resolve(cli)?;
    let ctx = &resolution.context;

    let value = ctx.get(key).ok_or_else(|| {
        let keys = ctx.keys();
        RunConfigError::KeyNotFound {
            key: key.to_string(),
            available: if keys.is_empty() {
                "(none)".to_string()
            } else {
                keys.join(", ")
            },
        }
    })?;

    println!("{}", display_value(value));
    Ok(())
}

/// Execute the `runcfg base-url` command.
pub fn execute_base_url(cli: &Cli) -> Result<()> {
    let (inputs, resolution) = context::resolve(cli)?;

    let Some(url) = resolution.context.base_url() else {
        return Err(RunConfigError::BaseUrlUnresolved {
            env: inputs.env_name.to_string(),
            path: resolution.file.path().to_path_buf(),
        });
    };

    println!("{url}");
    Ok(())
}
