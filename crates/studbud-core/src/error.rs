use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudbudError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
