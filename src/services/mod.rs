//! Service layer: pure functions over the store, sheets, and the
//! assistant gateway, plus the shared error taxonomy.

use thiserror::Error;

use crate::sheets::SheetError;
use crate::store::errors::StoreError;

pub mod assistant;
pub mod reports;
pub mod sync;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Validation(msg) => ServiceError::Validation(msg),
            StoreError::Persist(msg) => ServiceError::Internal(msg),
        }
    }
}
