//! barge CLI: validate a barge loading route.

use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use barge_route::config::RouteLimits;
use barge_route::route::validate_route;

#[derive(Parser)]
#[command(
    name = "barge",
    version,
    about = "Validate a barge loading route",
    long_about = "Reads a route from INPUT (or stdin): a line `N K P` followed by N lines \
                  `+ A B` (load fuel B into compartment A) or `- A B` (unload it). \
                  Prints the peak number of barrels aboard when the route is valid."
)]
struct Cli {
    /// Route file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// TOML file with route limits (max_operations, max_compartments, max_capacity).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the upper bound for N, K and P.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_value: Option<u32>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut limits = match &cli.config {
        Some(path) => RouteLimits::load(path)?,
        None => RouteLimits::default(),
    };
    if let Some(max) = cli.max_value {
        limits = RouteLimits::uniform(max as usize);
    }

    let report = match &cli.input {
        Some(path) => {
            let file = std::fs::File::open(path).into_diagnostic()?;
            validate_route(BufReader::new(file), &limits)?
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter `N K P`, then N operations (`+ A B` or `- A B`), one per line:");
            }
            validate_route(stdin.lock(), &limits)?
        }
    };

    println!("{report}");
    Ok(())
}
