use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::create::CreateSessionUseCase;

pub struct CreateSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSessionUseCase for CreateSessionUseCaseImpl {
    async fn execute(&self) -> Result<Session, SessionError> {
        let session = Session::new();
        self.repository.create(&session).await?;

        self.logger.info(&format!("Session created: {}", session.id));

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::session::state::{ViewEvent, ViewStateKind};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn create(&self, session: &Session) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Session, RepositoryError>;
            async fn apply_event(&self, id: Uuid, event: ViewEvent) -> Result<Session, SessionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_idle_session() {
        let mut mock_repo = MockSessionRepo::new();
        mock_repo
            .expect_create()
            .withf(|s| s.state.kind() == ViewStateKind::Idle)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateSessionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let session = use_case.execute().await.unwrap();

        assert!(session.state.can_submit());
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockSessionRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateSessionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            SessionError::Repository(RepositoryError::Duplicated)
        ));
    }
}
