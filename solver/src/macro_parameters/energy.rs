use rayon::prelude::*;
use boxmd_core::State;
use crate::solver::Potential;

/// `0.5 * sum |v|^2`, summed in particle order.
pub fn get_kinetic_energy(state: &State) -> f64 {
    0.5 * state.velocities.iter()
        .map(|velocity| velocity.magnitude_squared())
        .sum::<f64>()
}

/// Sum of pair potentials within cutoff under minimum image.
pub fn get_potential_energy(state: &State, potential: &Potential) -> f64 {
    let number_particles = state.len();
    let rows: Vec<f64> = (0..number_particles).into_par_iter().map(|i| {
        ((i + 1)..number_particles).map(|j| {
            potential.get_potential(state.get_least_r(i, j).magnitude())
        }).sum::<f64>()
    }).collect();
    rows.iter().sum()
}
