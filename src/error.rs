//! Error types for the recommendation engine.
//!
//! Only rejected input ends up here. A search that finds nothing is a valid
//! outcome and is reported through `Recommendation::outcome` instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid credit range for '{label}': max {max} is below min {min}")]
    InvalidCreditRange { label: String, min: u32, max: u32 },

    #[error("invalid total credit range: max {max} is below min {min}")]
    InvalidTotalRange { min: u32, max: u32 },

    #[error("wanted must be greater than zero")]
    InvalidWanted,

    #[error("mandatory courses '{first}' and '{second}' have a time conflict")]
    MandatoryConflict { first: String, second: String },

    #[error("mandatory course '{key}' is listed more than once")]
    DuplicateMandatory { key: String },

    #[error("invalid configuration value for {key}: '{value}'")]
    Config { key: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
