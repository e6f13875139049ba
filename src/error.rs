use thiserror::Error;

/// Failures the map pipeline can detect on its own inputs
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("map has no visible rows, nothing to write")]
    EmptyMap,
}
