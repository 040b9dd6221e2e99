mod cli;
mod cmd;
mod error;
mod io;
mod logging;

use aoc25_core::SolverConfig;
use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Circuits {
            file,
            neighbours,
            connections,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::circuits::run(&content, *neighbours, *connections, cli.format)
        }
        Command::Machines {
            file,
            max_candidates,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let config = SolverConfig {
                max_candidates: *max_candidates,
                ..SolverConfig::default()
            };
            cmd::machines::run(&content, &config, cli.format)
        }
    }
}
