use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::{SaveLoadError, State, Trajectory};

/// Everything a finished run hands over for persistence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    pub trajectory: Trajectory,
    pub final_state: State,
}

impl DataFile {
    pub fn new(trajectory: Trajectory, final_state: State) -> Self {
        Self {
            trajectory,
            final_state,
        }
    }

    /// Save data as json. Existing file is truncated.
    pub fn save_to_file(&self, path: &Path, pretty_print: bool) -> Result<(), SaveLoadError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        if pretty_print {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        log::info!("Trajectory with {} frames saved to {}",
            self.trajectory.len(), path.display());
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SaveLoadError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let data = serde_json::from_reader(reader)?;
        Ok(data)
    }

    pub fn particle_count(&self) -> usize {
        self.final_state.len()
    }
}
