pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::settings::DEFAULT_CONFIG_DIR;

/// Resolve the runtime configuration of an end-to-end test run.
///
/// Values come from `<config-dir>/env.<name>.json`, overridden by
/// CYPRESS_LOGIN_URL, CYPRESS_USERNAME and CYPRESS_PASSWORD.
#[derive(Parser, Debug)]
#[command(name = "runcfg", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Target environment (falls back to TEST_ENV, then "dev")
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Directory containing env.<name>.json files
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Seed a configuration value with the lowest precedence. Repeatable.
    #[arg(
        short = 'D',
        long = "define",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = context::parse_definition
    )]
    pub define: Vec<(String, String)>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and requested values
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved run configuration
    Resolve {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the password instead of masking it
        #[arg(long)]
        show_secrets: bool,
    },

    /// Validate the configuration and report where values come from
    Check {
        /// Fail when no base URL can be resolved
        #[arg(long)]
        strict: bool,
    },

    /// Print a single resolved value
    Get {
        /// Configuration key (e.g. username)
        key: String,
    },

    /// Print the resolved base URL
    BaseUrl,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The full run context as JSON
    Json,
    /// KEY=value lines of the configuration map
    Dotenv,
}
