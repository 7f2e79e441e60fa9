use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::gift::use_cases::generate::{
    GenerateGiftSuggestionsParams, GenerateGiftSuggestionsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::state::ViewEvent;
use crate::domain::session::use_cases::submit::{
    SubmitPreferenceParams, SubmitPreferenceUseCase,
};

pub struct SubmitPreferenceUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub generate_use_case: Arc<dyn GenerateGiftSuggestionsUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitPreferenceUseCase for SubmitPreferenceUseCaseImpl {
    async fn execute(&self, params: SubmitPreferenceParams) -> Result<Session, SessionError> {
        let session_id = params.session_id;

        // Claims the session; a second submit now sees `Loading` and is rejected.
        self.repository
            .apply_event(session_id, ViewEvent::Submit)
            .await?;

        self.logger
            .info(&format!("Session {} is loading suggestions", session_id));

        let event = match self
            .generate_use_case
            .execute(GenerateGiftSuggestionsParams {
                preference: params.preference,
            })
            .await
        {
            Ok(suggestions) => ViewEvent::Succeeded(suggestions),
            Err(err) => {
                self.logger.error(&format!(
                    "Session {} submission failed: {}",
                    session_id, err
                ));
                ViewEvent::Failed
            }
        };

        let session = self.repository.apply_event(session_id, event).await?;

        self.logger.info(&format!(
            "Session {} is now {}",
            session_id,
            session.state.kind()
        ));

        Ok(session)
    }
}
