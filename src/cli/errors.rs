use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Invalid normalization level: {level}. Must be non-negative")]
    NegativeLevel { level: f64 },
}
