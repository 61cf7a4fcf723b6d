use std::path::Path;

use serde_json::{Map, Value};

use crate::cli::{Cli, OutputFormat, context, output};
use crate::core::errors::Result;
use crate::core::models::run_context::RunContext;
use crate::core::models::secret_overlay::PASSWORD_KEY;

const MASK: &str = "********";

/// Execute the `runcfg resolve` command.
///
/// Resolves the run configuration and prints it, or writes it to
/// `out_path` when given. The password is masked unless `show_secrets`.
pub fn execute(
    cli: &Cli,
    format: OutputFormat,
    out_path: Option<&Path>,
    show_secrets: bool,
) -> Result<()> {
    let (inputs, resolution) = context::resolve(cli)?;

    let mut ctx = resolution.context;
    if !show_secrets {
        mask_secrets(&mut ctx);
    }

    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ctx)?,
        OutputFormat::Dotenv => to_dotenv(&ctx.env),
    };

    match out_path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))?;
            output::success(&format!(
                "Resolved {} key(s) for '{}'",
                ctx.env.len(),
                inputs.env_name
            ));
            output::success(&format!("Written to {}", path.display()));
        }
        None => println!("{content}"),
    }

    Ok(())
}

fn mask_secrets(ctx: &mut RunContext) {
    if let Some(value) = ctx.env.get_mut(PASSWORD_KEY) {
        *value = Value::from(MASK);
    }
}

/// Serialize the configuration map as `KEY=value` lines.
///
/// Strings are written verbatim; other values as compact JSON.
fn to_dotenv(env: &Map<String, Value>) -> String {
    env.iter()
        .map(|(key, value)| format!("{key}={}", display_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a value the way test specs consume it: strings unquoted.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
