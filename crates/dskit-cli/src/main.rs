//! dskit CLI - design system build-time generators
//!
//! Produces the aggregated component rules document and the combined
//! stylesheet for a React component library.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so stdout stays free for `scan --json`.
///
/// `RUST_LOG` wins when set; otherwise `verbose` raises the default to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "dskit=debug,dskit_core=debug,dskit_codegen=debug"
    } else {
        "dskit=info,dskit_core=info,dskit_codegen=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
