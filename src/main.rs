//! `fba-matrix` binary entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use fba_decision_matrix::cli::{self, Cli, Command};
use fba_decision_matrix::config::AppConfig;
use fba_decision_matrix::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            let config = AppConfig::load_validated().context("failed to load configuration")?;
            telemetry::init(&config.server).context("failed to initialise logging")?;
            server::run(config).await
        }
        Command::Evaluate(args) => {
            telemetry::init_cli(cli.verbose);
            println!("{}", cli::evaluate(&args)?);
            Ok(())
        }
        Command::Ask(args) => {
            telemetry::init_cli(cli.verbose);
            let stdin = io::stdin();
            let stdout = io::stdout();
            cli::run_interactive(stdin.lock(), stdout.lock(), args.format)?;
            Ok(())
        }
        Command::Questions => {
            print!("{}", cli::render_questions());
            Ok(())
        }
    }
}
