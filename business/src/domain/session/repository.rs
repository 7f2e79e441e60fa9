use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::errors::SessionError;
use super::model::Session;
use super::state::ViewEvent;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Session, RepositoryError>;
    /// Applies `event` to the stored session as one atomic read-transition-write.
    async fn apply_event(&self, id: Uuid, event: ViewEvent) -> Result<Session, SessionError>;
}
