use ecclesia_config::{CorsConfig, JwtConfig};

/// Immutable configuration shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}
