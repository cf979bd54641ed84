use std::path::Path;

use clap::Parser;
use pocket::cli::{output, Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Diagnostic logging goes to stderr, filtered by `POCKET_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("POCKET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    // Decode and inspect failures are reported against their input file.
    let (result, subject) = match cli.command {
        Commands::Encode {
            ref path,
            ref password,
            metadata,
            unique,
        } => (
            pocket::cli::commands::encode::execute(path, password.as_deref(), metadata, unique),
            None,
        ),
        Commands::Decode {
            ref input,
            ref password,
            ref output,
            force,
        } => (
            pocket::cli::commands::decode::execute(
                input,
                password.as_deref(),
                output.as_deref(),
                force,
            ),
            Some(input),
        ),
        Commands::Inspect { ref input } => {
            (pocket::cli::commands::inspect::execute(input), Some(input))
        }
        Commands::Completions { ref shell } => {
            (pocket::cli::commands::completions::execute(shell), None)
        }
    };

    if let Err(e) = result {
        let message = match subject {
            Some(input) => output::file_failure(Path::new(input), &e),
            None => e.to_string(),
        };
        output::error(&message);
        std::process::exit(1);
    }
}
