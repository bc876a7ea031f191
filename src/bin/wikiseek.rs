//! Interactive encyclopedia search.
//!
//! Console dialogue goes to stdout; tracing output goes to stderr
//! (`RUST_LOG` overrides the default `warn` filter).

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wikiseek::{Session, SystemBrowser};
use wikiseek_search::SearchConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wikiseek failed");
            println!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let session = Session::from_config(SearchConfig::default(), SystemBrowser)
        .context("failed to set up the search backend")?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let outcome = session
        .run(&mut input, &mut out)
        .context("search session failed")?;

    tracing::debug!(?outcome, "session finished");
    Ok(())
}
