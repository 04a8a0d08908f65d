use serde::{Deserialize, Serialize};

/// Cutoff radius in units of `sigma`
pub const CUTOFF_SIGMA: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Potential {
    /// `V(r) = 4 eps ((sigma/r)^12 - (sigma/r)^6)`, zero for `r >= r_cut`
    LennardJones {
        sigma: f64,
        eps: f64,
        r_cut: f64,
    },
}

impl Default for Potential {
    /// Reduced units, `r_cut = 2.5`
    fn default() -> Self {
        Potential::new_lennard_jones(1.0, 1.0)
    }
}

impl Potential {
    pub fn new_lennard_jones(sigma: f64, eps: f64) -> Potential {
        Potential::LennardJones {
            sigma,
            eps,
            r_cut: sigma * CUTOFF_SIGMA,
        }
    }

    pub fn r_cut(&self) -> f64 {
        match self {
            Potential::LennardJones { r_cut, .. } => *r_cut,
        }
    }

    pub fn get_potential(&self, r: f64) -> f64 {
        match *self {
            Potential::LennardJones { sigma, eps, r_cut } => {
                if r >= r_cut {
                    return 0.0;
                }
                let sigma_r = sigma / r;
                let sigma_r_6 = sigma_r.powi(6);
                let sigma_r_12 = sigma_r_6 * sigma_r_6;
                4.0f64 * eps * (sigma_r_12 - sigma_r_6)
            }
        }
    }

    /// Scalar applied along the unit displacement from `i` towards `j`.
    ///
    /// This is the potential value `V(r)` itself, not `-dV/dr`.
    pub fn get_force(&self, r: f64) -> f64 {
        self.get_potential(r)
    }
}
