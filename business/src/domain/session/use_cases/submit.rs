use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::gift::preference::Preference;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;

pub struct SubmitPreferenceParams {
    pub session_id: Uuid,
    pub preference: Preference,
}

/// Drives a session from `Idle` through `Loading` to `Results` or `Error`.
#[async_trait]
pub trait SubmitPreferenceUseCase: Send + Sync {
    async fn execute(&self, params: SubmitPreferenceParams) -> Result<Session, SessionError>;
}
