use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use boxmd_core::SaveLoadError;
use serde::{Deserialize, Serialize};
use crate::initializer::Thermostat;
use crate::solver::{ForceEvaluation, Potential};
use crate::SimulationError;

/// Parameters of one run. They never change while the run goes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Number of particles `N`
    pub particle_count: usize,
    /// Edge length `L` of the cubic box
    pub box_size: f64,
    /// Integration time step `dt`
    pub delta_time: f64,
    /// Number of steps `S`
    pub step_count: usize,
    /// Target temperature `T` in reduced units
    pub target_temperature: f64,
    pub potential: Potential,
    pub thermostat: Thermostat,
    pub force_evaluation: ForceEvaluation,
    /// Seed of initial positions and velocities. Fresh entropy if None.
    pub seed: Option<u64>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            particle_count: 10,
            box_size: 10.0,
            delta_time: 0.01,
            step_count: 1000,
            target_temperature: 300.0,
            potential: Potential::default(),
            thermostat: Thermostat::default(),
            force_evaluation: ForceEvaluation::default(),
            seed: None,
        }
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::Configuration(
            format!("{} must be positive and finite, got {}", name, value)))
    }
}

impl SimulationParameters {
    /// Check `N > 0, L > 0, dt > 0, T > 0` plus potential and thermostat settings.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.particle_count == 0 {
            return Err(SimulationError::Configuration(
                String::from("particle count must be positive")));
        }
        check_positive("box size", self.box_size)?;
        check_positive("time step", self.delta_time)?;
        check_positive("target temperature", self.target_temperature)?;
        match self.potential {
            Potential::LennardJones { sigma, eps, r_cut } => {
                check_positive("sigma", sigma)?;
                check_positive("cutoff radius", r_cut)?;
                if !eps.is_finite() {
                    return Err(SimulationError::Configuration(
                        format!("eps must be finite, got {}", eps)));
                }
            }
        }
        if let Thermostat::Berendsen { tau } = self.thermostat {
            check_positive("thermostat tau", tau)?;
            if tau < self.delta_time {
                return Err(SimulationError::Configuration(
                    format!("thermostat tau {} is shorter than time step {}", tau, self.delta_time)));
            }
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SaveLoadError> {
        let file = File::open(path)?;
        let parameters = serde_json::from_reader(BufReader::new(file))?;
        Ok(parameters)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveLoadError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
