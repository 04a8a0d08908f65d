use na::Vector3;
use rand::Rng;
use boxmd_core::State;
use crate::initializer::initialize_velocities;
use crate::{SimulationError, SimulationParameters};

/// Draw `number_particles` positions uniformly from `[0, box_size)^3`.
/// Overlapping particles are allowed.
pub fn randomize_positions<R: Rng + ?Sized>(rng: &mut R,
                                            number_particles: usize,
                                            box_size: f64) -> Vec<Vector3<f64>> {
    (0..number_particles).map(|_| {
        Vector3::new(rng.gen_range(0.0..box_size),
                     rng.gen_range(0.0..box_size),
                     rng.gen_range(0.0..box_size))
    }).collect()
}

/// Create state with random positions and velocities for validated `parameters`.
pub fn initialize_particles<R: Rng + ?Sized>(rng: &mut R,
                                             parameters: &SimulationParameters) -> Result<State, SimulationError> {
    let positions = randomize_positions(rng, parameters.particle_count, parameters.box_size);
    let velocities = initialize_velocities(rng, parameters.particle_count,
                                           parameters.target_temperature)?;
    Ok(State {
        positions,
        velocities,
        box_size: parameters.box_size,
    })
}
