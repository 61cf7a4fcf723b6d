mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);
    cli::output::set_quiet(args.quiet);

    let result = match &args.command {
        Commands::Resolve {
            format,
            output,
            show_secrets,
        } => cli::commands::resolve::execute(&args, *format, output.as_deref(), *show_secrets),
        Commands::Check { strict } => cli::commands::check::execute(&args, *strict),
        Commands::Get { key } => cli::commands::get::execute(&args, key),
        Commands::BaseUrl => cli::commands::get::execute_base_url(&args),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` enables debug logs for this
/// crate and everything else stays silent.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "runcfg=debug" } else { "off" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
