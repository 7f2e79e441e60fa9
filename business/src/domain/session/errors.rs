use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.not_found")]
    NotFound,
    #[error("session.submit_while_loading")]
    SubmitWhileLoading,
    #[error("session.invalid_transition")]
    InvalidTransition,
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for SessionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => SessionError::NotFound,
            other => SessionError::Repository(other),
        }
    }
}
