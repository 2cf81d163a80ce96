//! Core types for the schedule interpreter

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Schedule interpretation errors
#[derive(Debug, Error)]
pub enum CronError {
    /// The text matched no recognized phrase shape, or a schedule string
    /// was not a well-formed five-field cron line
    #[error("Invalid schedule expression: {0}")]
    InvalidExpression(String),
}
