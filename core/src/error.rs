use thiserror::Error;

/// Errors of saving and loading simulation data
#[derive(Error, Debug)]
pub enum SaveLoadError {
    #[error("can't access file: {0}")]
    Io(#[from] std::io::Error),
    #[error("can't (de)serialize data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("can't write csv: {0}")]
    Csv(#[from] csv::Error),
}
