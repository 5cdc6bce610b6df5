// src/main.rs

//! hwbot: homework review status notifier.
//!
//! Polls the homework review API on a fixed interval and relays status
//! changes to a Telegram chat.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hwbot::error::Result;
use hwbot::models::{Config, Credentials};
use hwbot::pipeline::Poller;

/// hwbot - Homework review status notifier
#[derive(Parser, Debug)]
#[command(name = "hwbot", version, about = "Homework review status notifier")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the polling loop
    Run {
        /// Execute a single cycle and exit
        #[arg(long)]
        once: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run { once } => {
            let config = Config::load_or_default(&cli.config);
            config.validate()?;

            let credentials = match Credentials::from_env() {
                Ok(credentials) => credentials,
                Err(error) => {
                    log::error!("{error}");
                    process::exit(1);
                }
            };

            let poller = Poller::new(&config, &credentials)?;
            if once {
                poller.run_once().await;
            } else {
                poller.run().await;
            }
        }
        Command::Validate => {
            let config = Config::load(&cli.config)?;
            config.validate()?;

            log::info!("Configuration OK");
            log::info!("    endpoint: {}", config.api.endpoint);
            log::info!("    poll interval: {}s", config.poll.interval_secs);
            log::info!("    request timeout: {}s", config.api.timeout_secs);
            log::info!("    telegram api: {}", config.telegram.api_base);
        }
    }

    Ok(())
}
