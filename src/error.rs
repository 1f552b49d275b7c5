//! Error types for the football statistics library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FootballError>;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {status}")]
    Status { status: reqwest::StatusCode },

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse numeric value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}
