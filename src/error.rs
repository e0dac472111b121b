use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or writing the sensor fixture table
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("Invalid noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),

    #[error("Data integrity violation: expected {expected} rows, got {actual}")]
    DataIntegrity { expected: usize, actual: usize },

    #[error("Data integrity violation: {0}")]
    Misaligned(String),

    #[error("Usage: smart-office-sim [output_path] [timezone] ({0})")]
    Usage(String),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
