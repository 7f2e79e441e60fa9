use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;

pub struct ResetSessionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait ResetSessionUseCase: Send + Sync {
    async fn execute(&self, params: ResetSessionParams) -> Result<Session, SessionError>;
}
