use rand::SeedableRng;
use rand::rngs::StdRng;
use boxmd_core::{DataFile, State, Trajectory};
use crate::initializer::{initialize_particles, ThermostatReport};
use crate::observer::{SimulationObserver, StepReport};
use crate::solver::{update_force, Integrator};
use crate::{SimulationError, SimulationParameters};

/// Lifecycle of a run. A solver only exists once parameters are validated,
/// so there is no uninitialized status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverStatus {
    /// State is drawn, no step has been taken
    Initialized,
    /// At least one step was taken, more remain
    Running,
    /// All steps are recorded, nothing changes anymore
    Completed,
    /// A step failed, nothing changes anymore
    Failed,
}

/// Trajectory and final kinematic state of a run
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    pub trajectory: Trajectory,
    pub final_state: State,
}

impl From<SimulationOutput> for DataFile {
    fn from(output: SimulationOutput) -> Self {
        DataFile::new(output.trajectory, output.final_state)
    }
}

/// Simulation engine. Owns the particle state and the trajectory.
///
/// Every step runs force evaluation, integration, thermostat and recording
/// in this order.
pub struct Solver {
    parameters: SimulationParameters,
    state: State,
    trajectory: Trajectory,
    integrator: Integrator,
    status: SolverStatus,
    current_step: usize,
}

impl Solver {
    /// Validate `parameters` and draw random initial state.
    ///
    /// # Examples
    ///
    /// ```
    /// # use boxmd_solver::{SimulationParameters, SimulationError};
    /// # use boxmd_solver::solver::Solver;
    /// let parameters = SimulationParameters { particle_count: 0, ..Default::default() };
    /// assert!(matches!(Solver::new(parameters), Err(SimulationError::Configuration(_))));
    /// ```
    pub fn new(parameters: SimulationParameters) -> Result<Self, SimulationError> {
        parameters.validate()?;
        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = initialize_particles(&mut rng, &parameters)?;
        Ok(Self::with_valid_state(parameters, state))
    }

    /// Validate `parameters` and start from given `state`.
    /// Positions are wrapped into the box.
    pub fn from_state(parameters: SimulationParameters, mut state: State) -> Result<Self, SimulationError> {
        parameters.validate()?;
        if state.positions.len() != state.velocities.len() {
            return Err(SimulationError::Configuration(format!(
                "{} positions but {} velocities", state.positions.len(), state.velocities.len())));
        }
        if state.len() != parameters.particle_count {
            return Err(SimulationError::Configuration(format!(
                "state has {} particles, expected {}", state.len(), parameters.particle_count)));
        }
        if state.box_size != parameters.box_size {
            return Err(SimulationError::Configuration(format!(
                "state box size {} differs from {}", state.box_size, parameters.box_size)));
        }
        let all_finite = state.positions.iter().chain(state.velocities.iter())
            .all(|v| v.iter().all(|x| x.is_finite()));
        if !all_finite {
            return Err(SimulationError::Configuration(
                String::from("initial state has non-finite values")));
        }
        state.apply_boundary_conditions();
        Ok(Self::with_valid_state(parameters, state))
    }

    fn with_valid_state(parameters: SimulationParameters, state: State) -> Self {
        Self {
            parameters,
            state,
            trajectory: Trajectory::new(),
            integrator: Integrator::SymplecticEuler,
            status: SolverStatus::Initialized,
            current_step: 0,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Number of completed steps
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    fn advance(&mut self) -> Result<ThermostatReport, SimulationError> {
        let step = self.current_step;
        let parameters = &self.parameters;
        let forces = update_force(&self.state, &parameters.potential, parameters.force_evaluation)
            .map_err(|e| SimulationError::NumericOverflow {
                step,
                i: e.i,
                j: e.j,
                distance: e.distance,
            })?;
        self.integrator.calculate(&mut self.state, &forces, parameters.delta_time);
        if let Some(particle) = self.state.first_non_finite_position() {
            return Err(SimulationError::NonFinitePosition { step, particle });
        }
        let report = parameters.thermostat
            .update(&mut self.state, parameters.delta_time, parameters.target_temperature)
            .map_err(|temperature| SimulationError::DegenerateThermostat {
                step,
                last_completed_step: step.checked_sub(1),
                temperature,
            })?;
        self.trajectory.record(&self.state.positions);
        self.current_step += 1;
        Ok(report)
    }

    /// Make one step and record its snapshot.
    ///
    /// Any error moves the solver to [SolverStatus::Failed].
    pub fn step(&mut self, observer: &mut dyn SimulationObserver) -> Result<(), SimulationError> {
        if matches!(self.status, SolverStatus::Completed | SolverStatus::Failed)
            || self.current_step >= self.parameters.step_count {
            return Err(SimulationError::Halted);
        }
        self.status = SolverStatus::Running;
        match self.advance() {
            Ok(report) => {
                if self.current_step == self.parameters.step_count {
                    self.status = SolverStatus::Completed;
                }
                observer.on_step(&StepReport {
                    step: self.current_step - 1,
                    kinetic_energy: report.kinetic_energy,
                    temperature: report.temperature,
                    lambda: report.lambda,
                    state: &self.state,
                });
                Ok(())
            }
            Err(error) => {
                self.status = SolverStatus::Failed;
                observer.on_error(&error);
                Err(error)
            }
        }
    }

    /// Execute all remaining steps. `on_start` is only emitted when no step
    /// was taken before.
    pub fn run(&mut self, observer: &mut dyn SimulationObserver) -> Result<&Trajectory, SimulationError> {
        if matches!(self.status, SolverStatus::Completed | SolverStatus::Failed) {
            return Err(SimulationError::Halted);
        }
        if self.current_step == 0 {
            observer.on_start(&self.parameters);
        }
        while self.current_step < self.parameters.step_count {
            self.step(observer)?;
        }
        self.status = SolverStatus::Completed;
        observer.on_finish(&self.trajectory);
        Ok(&self.trajectory)
    }

    pub fn into_output(self) -> SimulationOutput {
        SimulationOutput {
            trajectory: self.trajectory,
            final_state: self.state,
        }
    }
}
