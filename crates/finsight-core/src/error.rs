use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Store error: {0}")]
    Store(String),
    #[error("Record not found: {0}")]
    NotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}
