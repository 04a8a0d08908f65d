use boxmd_core::{State, Trajectory};
use crate::{SimulationError, SimulationParameters};

/// Structured event emitted after every recorded step
#[derive(Clone, Copy, Debug)]
pub struct StepReport<'a> {
    /// 0-based index of the step
    pub step: usize,
    /// Kinetic energy before the thermostat
    pub kinetic_energy: f64,
    /// Instantaneous temperature before the thermostat
    pub temperature: f64,
    /// Velocity scaling coefficient applied by the thermostat
    pub lambda: f64,
    /// State right after the snapshot was recorded
    pub state: &'a State,
}

/// Sink for simulation events. Every method does nothing by default.
pub trait SimulationObserver {
    fn on_start(&mut self, _parameters: &SimulationParameters) {}

    fn on_step(&mut self, _report: &StepReport) {}

    fn on_finish(&mut self, _trajectory: &Trajectory) {}

    fn on_error(&mut self, _error: &SimulationError) {}
}

pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Forwards events to the `log` facade
pub struct LogObserver;

impl SimulationObserver for LogObserver {
    fn on_start(&mut self, parameters: &SimulationParameters) {
        log::info!("Starting simulation: {} particles, box {}, dt {}, {} steps, T {}",
            parameters.particle_count, parameters.box_size, parameters.delta_time,
            parameters.step_count, parameters.target_temperature);
    }

    fn on_step(&mut self, report: &StepReport) {
        log::debug!("step {}: kinetic energy {:.6}, temperature {:.6}, lambda {:.6}",
            report.step, report.kinetic_energy, report.temperature, report.lambda);
    }

    fn on_finish(&mut self, trajectory: &Trajectory) {
        log::info!("Simulation finished, {} frames recorded", trajectory.len());
    }

    fn on_error(&mut self, error: &SimulationError) {
        log::error!("Simulation failed: {}", error);
    }
}
