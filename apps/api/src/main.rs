use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devteam_api::cli::{self, Cli, Commands};
use devteam_api::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before parsing so `.env` can supply `DEVTEAM_*` flag defaults
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let verbose = match cli.command {
        Commands::Serve { .. } => cli.verbose.max(1),
        _ => cli.verbose,
    };
    init_logging(verbose);

    let config = Config::from_env();

    match cli::run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from warn
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("devteam_api={},tower_http={}", level, level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
