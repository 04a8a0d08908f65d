/// Instantaneous temperature `2/3 * KE / N`, three degrees of freedom per particle.
pub fn get_temperature(kinetic_energy: f64, number_particles: usize) -> f64 {
    (2.0 / 3.0) * (kinetic_energy / number_particles as f64)
}
