mod cli;
mod config;
mod fetcher;
mod logging;
mod sandbox;
mod simulation;

use std::io;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use humantime::format_duration;
use log::debug;

use crate::{
    cli::{Cli, DecodeCli, SubCommand},
    config::{log_level, SimulateConfig},
    logging::{init_logging, LOG_TARGET},
    sandbox::web::WebSandbox,
    simulation::{response_bytes::decode_result, simulate},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.sub_command {
        SubCommand::Simulate(simulate_cli) => {
            let config = SimulateConfig::try_from(simulate_cli)?;
            init_logging(log_level(*cli.verbosity()))?;
            run_simulation(config)
        }
        SubCommand::Decode(decode_cli) => run_decode(decode_cli),
        SubCommand::Setup(setup_cli) => {
            generate(
                *setup_cli.shell(),
                &mut Cli::command(),
                env!("CARGO_PKG_NAME"),
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

fn run_simulation(config: SimulateConfig) -> Result<()> {
    debug!(target: LOG_TARGET, "Request arguments: {:?}", config.args());
    let sandbox = WebSandbox::new(config.web_config(), *config.limits())?;
    let result = simulate(&sandbox, config.args(), config.limits());
    debug!(
        target: LOG_TARGET,
        "{} HTTP request(s) made in {}",
        sandbox.queries_made(),
        format_duration(result.elapsed())
    );

    match (result.response_bytes_hexstring(), result.error_string()) {
        (Some(response_bytes), _) => {
            println!("Response bytes: {}", response_bytes);
            let decoded = decode_result(response_bytes, config.return_type())?;
            println!(
                "✅ Decoded response to {}: {}",
                config.return_type(),
                decoded
            );
            Ok(())
        }
        (None, Some(error_string)) => {
            println!("❌ Error during the execution: {}", error_string);
            Err(anyhow!("Request failed"))
        }
        (None, None) => Err(anyhow!("Simulation produced neither a response nor an error")),
    }
}

fn run_decode(options: &DecodeCli) -> Result<()> {
    let decoded = decode_result(options.response_bytes(), *options.return_type())?;
    println!("{}", decoded);
    Ok(())
}
