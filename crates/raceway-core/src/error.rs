use thiserror::Error;

#[derive(Debug, Error)]
pub enum RacewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, RacewayError>;
