//! Error types shared by the container, particle constructors and generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "Could not place particle {} of {requested} in group {group} within {attempts} attempts",
        .placed + 1
    )]
    GenerationFailed {
        group: usize,
        placed: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("Unknown particle id {0}")]
    UnknownParticle(usize),
}

impl DemError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DemError::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DemError>;
