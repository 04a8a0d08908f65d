use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use indicatif::ProgressBar;
use nalgebra::Vector3;
use thiserror::Error;
use boxmd_core::{DataFile, SaveLoadError, Trajectory};
use boxmd_solver::{SimulationError, SimulationParameters};
use boxmd_solver::initializer::Thermostat;
use boxmd_solver::macro_parameters::{get_center_of_mass_velocity, get_kinetic_energy, get_potential_energy, get_temperature};
use boxmd_solver::observer::{LogObserver, SimulationObserver, StepReport};
use boxmd_solver::solver::{ForceEvaluation, Potential, Solver};
use crate::args::{OutputFormat, RunArgs, ThermostatChoose};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Data(#[from] SaveLoadError),
    #[error("can't write energies: {0}")]
    Energies(#[from] csv::Error),
    #[error("can't access file: {0}")]
    Io(#[from] std::io::Error),
}

/// Short description of saved simulation data
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub frame_count: usize,
    pub particle_count: usize,
    pub box_size: f64,
    pub temperature: f64,
    pub center_of_mass_velocity: Vector3<f64>,
}

/// Shows progress, logs and optionally writes per-step energies
struct RunObserver {
    progress_bar: ProgressBar,
    log: LogObserver,
    potential: Potential,
    energies: Option<csv::Writer<BufWriter<File>>>,
    energies_error: Option<csv::Error>,
}

impl RunObserver {
    fn write_energies(&mut self, report: &StepReport) -> Result<(), csv::Error> {
        let Some(writer) = self.energies.as_mut() else {
            return Ok(());
        };
        let kinetic_energy = get_kinetic_energy(report.state);
        let potential_energy = get_potential_energy(report.state, &self.potential);
        let temperature = get_temperature(kinetic_energy, report.state.len());
        writer.serialize((report.step, kinetic_energy, potential_energy,
                          kinetic_energy + potential_energy, temperature,
                          report.temperature, report.lambda))
    }
}

impl SimulationObserver for RunObserver {
    fn on_start(&mut self, parameters: &SimulationParameters) {
        self.log.on_start(parameters);
    }

    fn on_step(&mut self, report: &StepReport) {
        self.log.on_step(report);
        if self.energies_error.is_none() {
            if let Err(e) = self.write_energies(report) {
                self.energies_error = Some(e);
            }
        }
        self.progress_bar.inc(1);
    }

    fn on_finish(&mut self, trajectory: &Trajectory) {
        self.log.on_finish(trajectory);
    }

    fn on_error(&mut self, error: &SimulationError) {
        self.progress_bar.abandon_with_message(format!("{}", error));
        self.log.on_error(error);
    }
}

/// Combine config file and command line flags. Flags win.
pub fn build_parameters(args: &RunArgs) -> Result<SimulationParameters, CliError> {
    let mut parameters = match &args.config {
        Some(path) => SimulationParameters::load_from_file(path)?,
        None => SimulationParameters::default(),
    };
    if let Some(particle_count) = args.particle_count {
        parameters.particle_count = particle_count;
    }
    if let Some(box_size) = args.box_size {
        parameters.box_size = box_size;
    }
    if let Some(delta_time) = args.delta_time {
        parameters.delta_time = delta_time;
    }
    if let Some(step_count) = args.step_count {
        parameters.step_count = step_count;
    }
    if let Some(temperature) = args.temperature {
        parameters.target_temperature = temperature;
    }
    if args.seed.is_some() {
        parameters.seed = args.seed;
    }
    match args.thermostat {
        Some(ThermostatChoose::Rescale) => parameters.thermostat = Thermostat::Rescale,
        Some(ThermostatChoose::Berendsen) => parameters.thermostat = Thermostat::Berendsen { tau: args.tau },
        None => {}
    }
    if args.serial {
        parameters.force_evaluation = ForceEvaluation::Serial;
    }
    parameters.validate()?;
    Ok(parameters)
}

pub fn run(args: &RunArgs) -> Result<(), CliError> {
    let parameters = build_parameters(args)?;
    let energies = match &args.energies {
        Some(path) => {
            let mut writer = csv::Writer::from_writer(BufWriter::new(File::create(path)?));
            writer.write_record(["step", "kinetic_energy", "potential_energy", "total_energy",
                                 "temperature", "temperature_before_thermostat", "lambda"])?;
            Some(writer)
        }
        None => None,
    };
    let mut observer = RunObserver {
        progress_bar: ProgressBar::new(parameters.step_count as u64),
        log: LogObserver,
        potential: parameters.potential,
        energies,
        energies_error: None,
    };
    let mut solver = Solver::new(parameters)?;
    solver.run(&mut observer)?;
    if let Some(e) = observer.energies_error.take() {
        return Err(e.into());
    }
    if let Some(writer) = observer.energies.as_mut() {
        writer.flush()?;
    }
    let output = solver.into_output();
    match args.format {
        OutputFormat::Json => {
            let data: DataFile = output.into();
            data.save_to_file(&args.out_file, args.pretty_print)?;
        }
        OutputFormat::Csv => {
            output.trajectory.save_csv(&args.out_file)?;
        }
    }
    observer.progress_bar.finish_with_message(
        format!("Calculated. States saved to {}", args.out_file.to_string_lossy()));
    Ok(())
}

pub fn generate_config(out_file: &Path) -> Result<(), CliError> {
    SimulationParameters::default().save_to_file(out_file)?;
    log::info!("Default parameters saved to {}", out_file.display());
    Ok(())
}

pub fn summarize(file: &Path) -> Result<Summary, CliError> {
    let data = DataFile::load_from_file(file)?;
    let state = &data.final_state;
    let temperature = get_temperature(get_kinetic_energy(state), state.len());
    Ok(Summary {
        frame_count: data.trajectory.len(),
        particle_count: data.particle_count(),
        box_size: state.box_size,
        temperature,
        center_of_mass_velocity: get_center_of_mass_velocity(state),
    })
}

pub fn info(file: &Path) -> Result<(), CliError> {
    let summary = summarize(file)?;
    println!("frames: {}", summary.frame_count);
    println!("particles: {}", summary.particle_count);
    println!("box size: {}", summary.box_size);
    println!("final temperature: {:.8}", summary.temperature);
    let v = summary.center_of_mass_velocity;
    println!("center of mass velocity: ({:.8}, {:.8}, {:.8})", v.x, v.y, v.z);
    Ok(())
}
