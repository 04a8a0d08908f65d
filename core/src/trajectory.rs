use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use na::Vector3;
use serde::{Deserialize, Serialize};
use crate::SaveLoadError;

/// Positions of every particle at the end of one step
pub type Frame = Vec<Vector3<f64>>;

/// Ordered history of position snapshots, one per completed step.
///
/// Frames are independent copies, later changes of [crate::State] never touch
/// them. There is no way to remove or rewrite a recorded frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `positions` as the next frame.
    pub fn record(&mut self, positions: &[Vector3<f64>]) {
        self.frames.push(positions.to_vec());
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame recorded after step `step` (0-based)
    pub fn get(&self, step: usize) -> Option<&[Vector3<f64>]> {
        self.frames.get(step).map(|frame| frame.as_slice())
    }

    pub fn last(&self) -> Option<&[Vector3<f64>]> {
        self.frames.last().map(|frame| frame.as_slice())
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Vector3<f64>]> {
        self.frames.iter().map(|frame| frame.as_slice())
    }

    /// Ordered positions of particle `particle` over the whole run.
    ///
    /// # Returns
    ///
    /// None if some frame has no such particle.
    pub fn particle_path(&self, particle: usize) -> Option<Vec<Vector3<f64>>> {
        self.frames.iter()
            .map(|frame| frame.get(particle).copied())
            .collect()
    }

    /// Write every frame as `step,particle,x,y,z` rows.
    pub fn save_csv(&self, path: &Path) -> Result<(), SaveLoadError> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        writer.write_record(["step", "particle", "x", "y", "z"])?;
        for (step, frame) in self.frames.iter().enumerate() {
            for (particle, position) in frame.iter().enumerate() {
                writer.serialize((step, particle, position.x, position.y, position.z))?;
            }
        }
        writer.flush()?;
        log::info!("Trajectory with {} frames saved to {}", self.len(), path.display());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
