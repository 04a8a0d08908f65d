use thiserror::Error;

/// Errors that stop a simulation run. None of them is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Invalid parameters or initial state, the run never starts
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Instantaneous temperature is zero, negative or not finite, so velocities can't be rescaled
    #[error("degenerate thermostat at step {step}: instantaneous temperature is {temperature}")]
    DegenerateThermostat {
        step: usize,
        /// Index of the last step that was fully recorded
        last_completed_step: Option<usize>,
        temperature: f64,
    },
    /// Pair force between particles `i` and `j` is not finite
    #[error("non-finite force between particles {i} and {j} at step {step} (r = {distance})")]
    NumericOverflow {
        step: usize,
        i: usize,
        j: usize,
        distance: f64,
    },
    #[error("non-finite position of particle {particle} at step {step}")]
    NonFinitePosition {
        step: usize,
        particle: usize,
    },
    /// Step requested after the run completed or failed
    #[error("simulation is halted, no further steps are allowed")]
    Halted,
}
