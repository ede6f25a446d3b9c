use checkout::application::session::Session;
use checkout::config::Config;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();

    // Diagnostics go to stderr so they never interleave with the menu.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let catalog = config.load_catalog().into_diagnostic()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        catalog,
        config.cart(),
        config.ledger(),
        stdin.lock(),
        stdout.lock(),
    );
    session.run().into_diagnostic()?;

    Ok(())
}
