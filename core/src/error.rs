use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid {name} weight: must be finite and greater than 0.0, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Invalid tolerance: must be finite and at least 0.0, got {0}")]
    InvalidTolerance(f64),

    #[error("Invalid sample count: must be between 1 and {max}, got {value}")]
    InvalidCount { value: usize, max: usize },

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    LoggerError(String),
}

/// Result type of the core library
pub type Result<T> = core::result::Result<T, Error>;
