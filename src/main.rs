// Copyright 2026 Factseal Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;

use factseal::cli;

#[derive(Parser)]
#[command(
    name = "factseal",
    about = "Factseal — extract pinned facts from public documents and verify their composite digest",
    version
)]
struct Cli {
    /// Per-fetch timeout in milliseconds
    #[arg(long, default_value = "15000")]
    timeout: u64,

    /// Enable verbose/debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = cli::check_cmd::run(cli.timeout).await;

    // Consistent exit codes: 0 = verification completed, 1 = pipeline error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}

fn init_tracing(verbose: bool, quiet: bool) {
    let directive = if quiet {
        "factseal=error"
    } else if verbose {
        "factseal=debug"
    } else {
        "factseal=info"
    };

    // Logs go to stderr; stdout carries only the verdict.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("log directive is valid")),
        )
        .with_writer(std::io::stderr)
        .init();
}
