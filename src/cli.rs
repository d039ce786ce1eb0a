use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PETCR evaporation toolkit.
#[derive(Parser)]
#[command(
    name = "petcr",
    version,
    about = "Monthly evaporation with the BGCR-Budyko model"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the meteorology-to-evaporation pipeline from a TOML file.
    Run(RunArgs),
    /// Solve the BGCR system for explicit P, Epa, Erad and w series.
    Solve(SolveArgs),
    /// Compare uniform, SI and SI+albedo w on synthetic sub-basins.
    Demo(DemoArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "petcr.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Comma-separated precipitation series (mm per period).
    #[arg(long, required = true, value_delimiter = ',', num_args = 1.., allow_hyphen_values = true)]
    pub precip: Vec<f64>,

    /// Comma-separated apparent potential evaporation series.
    #[arg(long, required = true, value_delimiter = ',', num_args = 1.., allow_hyphen_values = true)]
    pub epa: Vec<f64>,

    /// Comma-separated radiation-term series.
    #[arg(long, required = true, value_delimiter = ',', num_args = 1.., allow_hyphen_values = true)]
    pub erad: Vec<f64>,

    /// Budyko shape parameter, one value or one per period.
    #[arg(long, required = true, value_delimiter = ',', num_args = 1.., allow_hyphen_values = true)]
    pub w: Vec<f64>,

    /// Invalid-input policy: strict, mask or passthrough.
    #[arg(long, default_value = "strict")]
    pub policy: String,

    /// Write JSON to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// RNG seed for the precipitation noise.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Number of synthetic years.
    #[arg(long, default_value_t = 41)]
    pub years: usize,

    /// Number of synthetic sub-basins.
    #[arg(long, default_value_t = 8)]
    pub basins: usize,

    /// Uniform w used as the baseline strategy.
    #[arg(long, default_value_t = 1.6)]
    pub uniform_w: f64,

    /// Write JSON to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
