use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;

pub struct GetSessionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetSessionUseCase: Send + Sync {
    async fn execute(&self, params: GetSessionParams) -> Result<Session, SessionError>;
}
