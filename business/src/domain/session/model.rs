use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::SessionError;
use super::state::{ViewEvent, ViewState};

/// One browser tab's view controller.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub state: ViewState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: ViewState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, event: ViewEvent) -> Result<(), SessionError> {
        self.state = self.state.apply(event)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
