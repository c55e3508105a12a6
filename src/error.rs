
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Candidate pool too small: need {needed}, only {available} eligible")]
    PoolTooSmall { needed: usize, available: usize },

    #[error("No eligible candidates in the pool")]
    EmptyCandidatePool,
}

pub type TfResult<T> = Result<T, TeamForgeError>;
