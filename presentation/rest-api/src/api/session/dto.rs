use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::gift::card::build_cards;
use business::domain::session::model::Session;
use business::domain::session::state::{ViewState, ViewStateKind};

use crate::api::gift::dto::GiftCardResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum ViewStateDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "loading")]
    Loading,
    #[oai(rename = "results")]
    Results,
    #[oai(rename = "error")]
    Error,
}

impl From<ViewStateKind> for ViewStateDto {
    fn from(kind: ViewStateKind) -> Self {
        match kind {
            ViewStateKind::Idle => ViewStateDto::Idle,
            ViewStateKind::Loading => ViewStateDto::Loading,
            ViewStateKind::Results => ViewStateDto::Results,
            ViewStateKind::Error => ViewStateDto::Error,
        }
    }
}

/// What one browser tab should render.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Session unique identifier
    pub id: String,
    pub state: ViewStateDto,
    /// Whether the form's submit button is enabled
    pub can_submit: bool,
    /// Result cards; empty unless `state` is `results`
    pub suggestions: Vec<GiftCardResponse>,
    /// User-facing message; present only when `state` is `error`
    #[oai(skip_serializing_if_is_none)]
    pub error_message: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last transition timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let state = ViewStateDto::from(session.state.kind());
        let can_submit = session.state.can_submit();
        let (suggestions, error_message) = match session.state {
            ViewState::Results(suggestions) => (
                build_cards(suggestions).into_iter().map(|c| c.into()).collect(),
                None,
            ),
            ViewState::Error(message) => (Vec::new(), Some(message)),
            ViewState::Idle | ViewState::Loading => (Vec::new(), None),
        };

        Self {
            id: session.id.to_string(),
            state,
            can_submit,
            suggestions,
            error_message,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
