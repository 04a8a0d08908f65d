use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap::ValueEnum;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThermostatChoose {
    /// rescale velocities to the target temperature every step
    Rescale,
    /// weak coupling with time constant tau
    Berendsen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// trajectory and final state in one json file
    #[default]
    Json,
    /// trajectory only, one row per particle per step
    Csv,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// json file with simulation parameters, flags below override it
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// number of particles
    #[arg(short = 'n', long)]
    pub particle_count: Option<usize>,
    /// edge length of cubic box
    #[arg(short = 'L', long)]
    pub box_size: Option<f64>,
    /// integration time step
    #[arg(short = 'd', long)]
    pub delta_time: Option<f64>,
    /// number of steps
    #[arg(short = 's', long)]
    pub step_count: Option<usize>,
    /// target temperature in reduced units
    #[arg(short = 'T', long)]
    pub temperature: Option<f64>,
    /// seed of initial state
    #[arg(long)]
    pub seed: Option<u64>,
    /// thermostat type
    #[arg(long, value_enum)]
    pub thermostat: Option<ThermostatChoose>,
    /// time constant of berendsen thermostat
    #[arg(long, default_value_t = 0.1)]
    pub tau: f64,
    /// evaluate forces on one thread
    #[arg(long)]
    pub serial: bool,
    /// file for output
    #[arg(short = 'o', long)]
    pub out_file: PathBuf,
    /// format of output file
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// csv file for per-step energies and temperature
    #[arg(short = 'e', long)]
    pub energies: Option<PathBuf>,
    /// pretty print json output
    #[arg(short = 'p', long)]
    pub pretty_print: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// run simulation and save trajectory
    Run(RunArgs),
    /// write default simulation parameters to json file
    GenerateConfig {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
    },
    /// print summary of saved simulation data
    Info {
        /// json file produced by run
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
}
