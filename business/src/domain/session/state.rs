use crate::domain::gift::model::Suggestion;

use super::errors::SessionError;

/// Shown to the user whenever a submission fails. Raw error detail goes to the log only.
pub const GENERIC_ERROR_MESSAGE: &str =
    "We couldn't generate suggestions at the moment. Please check your API Key or try again.";

/// What the browser is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Results(Vec<Suggestion>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Submit,
    Succeeded(Vec<Suggestion>),
    Failed,
    Reset,
}

/// Tag-only view of `ViewState`, for logs and wire DTOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStateKind {
    Idle,
    Loading,
    Results,
    Error,
}

impl std::fmt::Display for ViewStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewStateKind::Idle => write!(f, "idle"),
            ViewStateKind::Loading => write!(f, "loading"),
            ViewStateKind::Results => write!(f, "results"),
            ViewStateKind::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewEvent::Submit => write!(f, "submit"),
            ViewEvent::Succeeded(_) => write!(f, "succeeded"),
            ViewEvent::Failed => write!(f, "failed"),
            ViewEvent::Reset => write!(f, "reset"),
        }
    }
}

impl ViewState {
    /// Computes the next state. The current state is left untouched on error.
    pub fn apply(&self, event: ViewEvent) -> Result<ViewState, SessionError> {
        match (self, event) {
            (ViewState::Idle, ViewEvent::Submit) => Ok(ViewState::Loading),
            (ViewState::Loading, ViewEvent::Succeeded(suggestions)) => {
                Ok(ViewState::Results(suggestions))
            }
            (ViewState::Loading, ViewEvent::Failed) => {
                Ok(ViewState::Error(GENERIC_ERROR_MESSAGE.to_string()))
            }
            (ViewState::Results(_), ViewEvent::Reset) | (ViewState::Error(_), ViewEvent::Reset) => {
                Ok(ViewState::Idle)
            }

            (ViewState::Loading, ViewEvent::Submit) => Err(SessionError::SubmitWhileLoading),
            (ViewState::Idle, ViewEvent::Succeeded(_) | ViewEvent::Failed | ViewEvent::Reset)
            | (ViewState::Loading, ViewEvent::Reset)
            | (
                ViewState::Results(_),
                ViewEvent::Submit | ViewEvent::Succeeded(_) | ViewEvent::Failed,
            )
            | (
                ViewState::Error(_),
                ViewEvent::Submit | ViewEvent::Succeeded(_) | ViewEvent::Failed,
            ) => Err(SessionError::InvalidTransition),
        }
    }

    pub fn kind(&self) -> ViewStateKind {
        match self {
            ViewState::Idle => ViewStateKind::Idle,
            ViewState::Loading => ViewStateKind::Loading,
            ViewState::Results(_) => ViewStateKind::Results,
            ViewState::Error(_) => ViewStateKind::Error,
        }
    }

    /// Whether the form's submit control is enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            ViewState::Results(suggestions) => suggestions,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}
