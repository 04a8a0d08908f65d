use itertools::Itertools;
use na::Vector3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use boxmd_core::State;
use crate::solver::Potential;

/// How the pair sum is distributed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceEvaluation {
    /// One loop over unordered pairs `i < j`, Newton's third law applied to both ends
    Serial,
    /// Every worker owns the force of its particles and sums their whole row.
    /// Contributions are added in the same order as in [ForceEvaluation::Serial],
    /// so both give bit-identical forces.
    #[default]
    Parallel,
}

/// Pair with non-finite force, `i < j`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonFiniteForce {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Force acting on particle `i` from particle `j`, `i < j`.
pub fn get_pair_force(state: &State, potential: &Potential,
                      i: usize, j: usize) -> Result<Vector3<f64>, NonFiniteForce> {
    let r_vec = state.get_least_r(i, j);
    let r = r_vec.magnitude();
    if r >= potential.r_cut() {
        return Ok(Vector3::zeros());
    }
    let force_magnitude = potential.get_force(r);
    let force = (r_vec / r) * force_magnitude;
    if force.iter().all(|x| x.is_finite()) {
        Ok(force)
    } else {
        Err(NonFiniteForce { i, j, distance: r })
    }
}

/// Add forces from every other particle to `force` of particle `i`,
/// in ascending order of the other index.
fn accumulate_row(state: &State, potential: &Potential, i: usize,
                  force: &mut Vector3<f64>) -> Result<(), NonFiniteForce> {
    for j in 0..state.len() {
        if j < i {
            *force -= get_pair_force(state, potential, j, i)?;
        } else if j > i {
            *force += get_pair_force(state, potential, i, j)?;
        }
    }
    Ok(())
}

/// Compute net force on every particle. Doesn't change `state`.
///
/// If several pairs overflow, both evaluations report the first one in
/// `(i, j)` order.
pub fn update_force(state: &State, potential: &Potential,
                    evaluation: ForceEvaluation) -> Result<Vec<Vector3<f64>>, NonFiniteForce> {
    let number_particles = state.len();
    let mut forces = vec![Vector3::zeros(); number_particles];
    match evaluation {
        ForceEvaluation::Serial => {
            for (i, j) in (0..number_particles).tuple_combinations() {
                let force = get_pair_force(state, potential, i, j)?;
                forces[i] += force;
                forces[j] -= force;
            }
        }
        ForceEvaluation::Parallel => {
            let first_error = forces.par_iter_mut().enumerate()
                .filter_map(|(i, force)| accumulate_row(state, potential, i, force).err())
                .min_by_key(|error| (error.i, error.j));
            if let Some(error) = first_error {
                return Err(error);
            }
        }
    }
    Ok(forces)
}
