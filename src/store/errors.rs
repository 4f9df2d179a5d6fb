use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Persistence error: {0}")]
    Persist(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
