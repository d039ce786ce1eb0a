mod cli;
mod config;
mod convert;
mod demo_cmd;
mod logging;
mod output;
mod run_cmd;
mod solve_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_cmd::run(args),
        Command::Solve(args) => solve_cmd::run(args),
        Command::Demo(args) => demo_cmd::run(args),
    }
}
