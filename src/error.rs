//! Error types for plugin options and delta handling

use thiserror::Error;

/// Errors raised while interpreting data supplied by the host
#[derive(Error, Debug)]
pub enum Error {
    /// Path is not one of the subscribed Signal K paths
    #[error("Unknown path: {0}")]
    UnknownPath(String),

    /// Plugin options are out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Value has the wrong JSON shape for its path
    #[error("Unexpected value for {path}: expected {expected}")]
    UnexpectedValue { path: String, expected: &'static str },

    /// Host JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
