use clap::Parser;
use crate::args::*;
use crate::commands::{generate_config, info, run};

mod args;
mod commands;


fn main() {
    env_logger::init();
    let args = Args::parse();
    let result = match &args.command {
        Commands::Run(run_args) => run(run_args),
        Commands::GenerateConfig { out_file } => generate_config(out_file),
        Commands::Info { file } => info(file),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
