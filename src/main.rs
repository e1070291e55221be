//! chainup - Main entry point
//!
//! Starts the local development node, then runs the deployment script against
//! it, stopping at the first failure.

use tracing::{debug, error, info};

use chainup::cli::Cli;
use chainup::{runner, stack};

/// Initialize the logger with appropriate settings
///
/// Logs go to stderr so the children and the final status line keep stdout
/// to themselves. `RUST_LOG` overrides the default `info` level.
fn init_logger() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_logger();
    info!("chainup starting up");

    let _cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match runner::run_sequence(stack::DEV_STACK) {
        Ok(()) => {
            info!("all steps completed");
            println!("\n✓ Server started successfully.");
        }
        Err(err) => {
            error!("startup aborted: {err}");
            eprintln!("\n✗ An error occurred while executing the startup sequence");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
