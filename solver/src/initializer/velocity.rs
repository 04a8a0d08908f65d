use na::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use crate::SimulationError;

/// Draw velocity components from normal distribution with zero mean and
/// variance `temperature` (unit mass).
pub fn initialize_velocities<R: Rng + ?Sized>(rng: &mut R,
                                              number_particles: usize,
                                              temperature: f64) -> Result<Vec<Vector3<f64>>, SimulationError> {
    let sigma = f64::sqrt(temperature);
    let normal_distribution = Normal::new(0.0f64, sigma)
        .map_err(|e| SimulationError::Configuration(
            format!("can't create velocity distribution for temperature {}: {}", temperature, e)))?;
    Ok((0..number_particles).map(|_| {
        let x = normal_distribution.sample(rng);
        let y = normal_distribution.sample(rng);
        let z = normal_distribution.sample(rng);
        Vector3::new(x, y, z)
    }).collect())
}
