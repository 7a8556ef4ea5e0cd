/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.load")]
    Load,
    #[error("repository.ids_exhausted")]
    IdsExhausted,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn load() -> Self {
        RepositoryError::Load
    }
}
