use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod types;
mod validation;

use config::{Cli, Config};
use validation::CardValidator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::from(cli);
    debug!("validate-agent-card v{}", env!("CARGO_PKG_VERSION"));
    debug!("Agent card URL: {}", config.card_url());

    tokio::select! {
        result = run(config) => match result {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                println!("❌ Validation error: {}", e);
                ExitCode::FAILURE
            }
        },
        _ = interrupt_signal() => {
            println!("\n❌ Validation interrupted");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<bool> {
    let validator = CardValidator::new(config)?;
    let mut stdout = std::io::stdout();
    validator.run(&mut stdout).await
}

/// Logs go to stderr so they never interleave with the report on stdout.
/// `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "validate_agent_card=debug"
    } else {
        "validate_agent_card=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Wait for an interrupt (Ctrl+C or SIGTERM)
async fn interrupt_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, aborting validation");
        }
        _ = terminate => {
            info!("Received SIGTERM, aborting validation");
        }
    }
}
