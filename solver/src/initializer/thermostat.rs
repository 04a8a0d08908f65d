use serde::{Deserialize, Serialize};
use boxmd_core::State;
use crate::macro_parameters::{get_kinetic_energy, get_temperature};

/// Thermostat enum object
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Thermostat {
    /// Rescale velocities so the temperature hits the target exactly
    #[default]
    Rescale,
    /// Paper: <https://pure.rug.nl/ws/files/64380902/1.448118.pdf>
    Berendsen {
        tau: f64,
    },
}

/// What the thermostat saw and did during one application
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermostatReport {
    /// Kinetic energy before scaling
    pub kinetic_energy: f64,
    /// Instantaneous temperature before scaling
    pub temperature: f64,
    /// Velocity scaling coefficient
    pub lambda: f64,
}

impl Thermostat {
    /// Calculate velocity scaling coefficient.
    ///
    /// # Returns
    ///
    /// None if `temperature` is zero, negative or not finite.
    pub fn calculate_lambda(&self, temperature: f64, target_temperature: f64,
                            delta_time: f64) -> Option<f64> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return None;
        }
        let lambda_squared = match self {
            Thermostat::Rescale => target_temperature / temperature,
            Thermostat::Berendsen { tau } => {
                1.0 + delta_time / *tau * (target_temperature / temperature - 1.0)
            }
        };
        let lambda = lambda_squared.sqrt();
        lambda.is_finite().then_some(lambda)
    }

    /// Scale velocity.
    ///
    /// On failure returns the offending instantaneous temperature, velocities
    /// are left untouched.
    pub fn update(&self, state: &mut State, delta_time: f64,
                  target_temperature: f64) -> Result<ThermostatReport, f64> {
        let kinetic_energy = get_kinetic_energy(state);
        let temperature = get_temperature(kinetic_energy, state.len());
        let lambda = self.calculate_lambda(temperature, target_temperature, delta_time)
            .ok_or(temperature)?;
        state.velocities.iter_mut().for_each(|velocity| {
            *velocity *= lambda;
        });
        Ok(ThermostatReport {
            kinetic_energy,
            temperature,
            lambda,
        })
    }
}
