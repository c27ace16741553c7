//! Errors for the fallible edges of the engine: reading policy files and
//! palette JSON. The color math itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid policy file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid repair policy: {field} = {value} (expected {expected})")]
    InvalidPolicy {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("unknown template kind: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
