use super::{
    cors_config, gemini_config::GeminiConfig, server_config::ServerConfig,
    session_config::SessionConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
