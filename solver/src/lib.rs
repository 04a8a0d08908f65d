extern crate boxmd_core;
extern crate nalgebra as na;
extern crate rand_distr;
extern crate rayon;
mod error;
mod params;
pub mod initializer;
pub mod macro_parameters;
pub mod observer;
pub mod solver;

pub use error::SimulationError;
pub use params::SimulationParameters;
