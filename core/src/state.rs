use na::Vector3;
use serde::{Deserialize, Serialize};

/// Kinematic state of every particle in a cubic periodic box.
///
/// `positions[i]` and `velocities[i]` always describe the same particle.
/// All particles have unit mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Coordinates of particles, each component in `[0, box_size)` after
    /// [State::apply_boundary_conditions]
    pub positions: Vec<Vector3<f64>>,
    /// Velocities of particles
    pub velocities: Vec<Vector3<f64>>,
    /// Edge length of the cubic box
    pub box_size: f64,
}

impl State {
    /// Create state from index-aligned positions and velocities.
    ///
    /// # Returns
    ///
    /// None if `positions` and `velocities` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector3;
    /// # use boxmd_core::State;
    /// let state = State::new(vec![Vector3::zeros()], vec![], 10.0);
    /// assert!(state.is_none());
    /// let state = State::new(vec![Vector3::zeros()], vec![Vector3::x()], 10.0).unwrap();
    /// assert_eq!(state.len(), 1);
    /// ```
    pub fn new(positions: Vec<Vector3<f64>>,
               velocities: Vec<Vector3<f64>>,
               box_size: f64) -> Option<Self> {
        if positions.len() != velocities.len() {
            return None;
        }
        Some(Self {
            positions,
            velocities,
            box_size,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Makes every particle to satisfy periodic boundary conditions.
    ///
    /// Every coordinate is reduced modulo `box_size` into `[0, box_size)`, no
    /// matter how many box lengths it has travelled.
    pub fn apply_boundary_conditions(&mut self) {
        let box_size = self.box_size;
        self.positions.iter_mut().for_each(|position| {
            position.iter_mut().for_each(|x| *x = wrap_coordinate(*x, box_size));
        });
    }

    /// Shortest displacement from particle `i` to particle `j` among all
    /// periodic images (minimum-image convention).
    pub fn get_least_r(&self, i: usize, j: usize) -> Vector3<f64> {
        minimum_image(self.positions[j] - self.positions[i], self.box_size)
    }

    /// Check that every position lies inside the box.
    pub fn is_wrapped(&self) -> bool {
        self.positions.iter().all(|position| {
            position.iter().all(|&x| (0.0..self.box_size).contains(&x))
        })
    }

    /// Get index of first particle with non-finite position, if any.
    pub fn first_non_finite_position(&self) -> Option<usize> {
        self.positions.iter().position(|p| !p.iter().all(|x| x.is_finite()))
    }
}

/// Reduce a coordinate into `[0, box_size)`.
///
/// `rem_euclid` of a tiny negative value rounds up to exactly `box_size`,
/// which is folded back to zero.
pub fn wrap_coordinate(x: f64, box_size: f64) -> f64 {
    let wrapped = x.rem_euclid(box_size);
    if wrapped >= box_size {
        0.0
    } else {
        wrapped
    }
}

/// Subtract `box_size * round(displacement / box_size)` component-wise.
///
/// Halves round to even, so a displacement of exactly `±box_size / 2` is
/// left as is.
pub fn minimum_image(displacement: Vector3<f64>, box_size: f64) -> Vector3<f64> {
    displacement.map(|d| d - (d / box_size).round_ties_even() * box_size)
}
