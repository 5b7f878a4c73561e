use thiserror::Error;

use crate::config::ConfigError;
use crate::hostname::InvalidReason;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    InvalidHostname(#[from] InvalidReason),

    #[error("{0}")]
    ResolutionFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
