use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.already_exists")]
    AlreadyExists,
    #[error("product.invalid_date_format")]
    InvalidDateFormat,
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_data")]
    InvalidData,
    #[error("product.internal")]
    Internal(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository failure, keeping `NotFound` distinct from opaque storage errors.
    pub fn from_repository(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Internal(other),
        }
    }
}
