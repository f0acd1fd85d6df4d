//! wharf CLI entrypoint

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wharf::cli::Cli;
use wharf::errors::{humanize, Reported};
use wharf::output;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Parse and execute CLI
    let cli = Cli::parse();
    match cli.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Commands print their own message before returning the
            // sentinel; don't print it twice.
            if err.downcast_ref::<Reported>().is_none() {
                eprintln!("{}", output::error_line(&humanize(&err)));
            }
            ExitCode::FAILURE
        }
    }
}
