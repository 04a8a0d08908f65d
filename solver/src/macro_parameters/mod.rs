mod energy;
mod temperature;

pub use energy::*;
use boxmd_core::State;
use na::Vector3;
pub use temperature::*;

/// Total momentum of particles (unit masses)
pub fn get_momentum(state: &State) -> Vector3<f64> {
    state.velocities.iter().sum()
}

/// Get velocity of center of mass of all particles
pub fn get_center_of_mass_velocity(state: &State) -> Vector3<f64> {
    if state.is_empty() {
        return Vector3::zeros();
    }
    get_momentum(state) / state.len() as f64
}
