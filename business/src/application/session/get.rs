use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::get::{GetSessionParams, GetSessionUseCase};

pub struct GetSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSessionUseCase for GetSessionUseCaseImpl {
    async fn execute(&self, params: GetSessionParams) -> Result<Session, SessionError> {
        self.logger.debug(&format!("Fetching session: {}", params.id));

        let session = self.repository.get_by_id(params.id).await?;

        Ok(session)
    }
}
