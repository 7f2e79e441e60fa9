use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::state::ViewEvent;
use crate::domain::session::use_cases::reset::{ResetSessionParams, ResetSessionUseCase};

pub struct ResetSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetSessionUseCase for ResetSessionUseCaseImpl {
    async fn execute(&self, params: ResetSessionParams) -> Result<Session, SessionError> {
        let session = self
            .repository
            .apply_event(params.id, ViewEvent::Reset)
            .await?;

        self.logger.info(&format!("Session reset: {}", params.id));

        Ok(session)
    }
}
