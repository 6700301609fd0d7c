use thiserror::Error;

/// Value object construction and combination errors
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
