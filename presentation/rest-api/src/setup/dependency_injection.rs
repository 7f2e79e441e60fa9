use std::sync::Arc;

use logger::TracingLogger;
use persistence::session::repository::SessionRepositoryInMemory;

use gemini::image_generator::ImageGeneratorGemini;
use gemini::suggestion_generator::SuggestionGeneratorGemini;

use business::application::gift::generate::GenerateGiftSuggestionsUseCaseImpl;
use business::application::session::create::CreateSessionUseCaseImpl;
use business::application::session::get::GetSessionUseCaseImpl;
use business::application::session::reset::ResetSessionUseCaseImpl;
use business::application::session::submit::SubmitPreferenceUseCaseImpl;

use crate::api::gift::routes::GiftApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::session::routes::SessionApi;
use crate::config::gemini_config::GeminiConfig;
use crate::config::session_config::SessionConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub gift_api: GiftApi,
    pub session_api: SessionApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: &GeminiConfig, session_config: &SessionConfig) -> Self {
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let gemini_client = gemini_config.client();
        let suggestion_generator = Arc::new(SuggestionGeneratorGemini::new(
            gemini_client.clone(),
            Arc::new(TracingLogger::new("suggestion_generator")),
        ));
        let image_generator = Arc::new(ImageGeneratorGemini::new(
            gemini_client,
            Arc::new(TracingLogger::new("image_generator")),
        ));
        let session_repository = Arc::new(SessionRepositoryInMemory::with_idle_ttl(
            session_config.idle_ttl,
        ));

        // Gift use cases
        let generate_use_case = Arc::new(GenerateGiftSuggestionsUseCaseImpl {
            generator: suggestion_generator,
            images: image_generator,
            logger: Arc::new(TracingLogger::new("gift")),
        });

        // Session use cases
        let session_logger = Arc::new(TracingLogger::new("session"));
        let create_session_use_case = Arc::new(CreateSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: session_logger.clone(),
        });
        let get_session_use_case = Arc::new(GetSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: session_logger.clone(),
        });
        let submit_use_case = Arc::new(SubmitPreferenceUseCaseImpl {
            repository: session_repository.clone(),
            generate_use_case: generate_use_case.clone(),
            logger: session_logger.clone(),
        });
        let reset_session_use_case = Arc::new(ResetSessionUseCaseImpl {
            repository: session_repository,
            logger: session_logger,
        });

        let gift_api = GiftApi::new(generate_use_case);

        let session_api = SessionApi::new(
            create_session_use_case,
            get_session_use_case,
            submit_use_case,
            reset_session_use_case,
        );

        Self {
            health_api,
            gift_api,
            session_api,
        }
    }
}
