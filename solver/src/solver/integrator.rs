use na::Vector3;
use rayon::prelude::*;
use boxmd_core::State;

pub enum Integrator {
    /// Velocities are kicked by current forces first, then positions drift
    /// with the already updated velocities (unit mass)
    SymplecticEuler,
}

impl Integrator {
    /// Just integrator iteration. Positions are wrapped into the box afterwards.
    pub fn calculate(&self, state: &mut State, forces: &[Vector3<f64>], delta_time: f64) {
        match self {
            Integrator::SymplecticEuler => {
                state.velocities.par_iter_mut().zip(forces.par_iter()).for_each(|(velocity, force)| {
                    *velocity += force * delta_time;
                });
                let State { positions, velocities, .. } = &mut *state;
                positions.par_iter_mut().zip(velocities.par_iter()).for_each(|(position, velocity)| {
                    *position += velocity * delta_time;
                });
                state.apply_boundary_conditions();
            }
        }
    }
}
