use crate::{ConfigError, FromEnv, env_optional};

/// Origin of the local frontend dev server, always allowed
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin policy configuration
///
/// The allow-list is the configured frontend origin (`FRONTEND_URL`, optional)
/// plus [`LOCAL_DEV_ORIGIN`].
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    pub frontend_url: Option<String>,
}

impl CorsConfig {
    pub fn new(frontend_url: Option<String>) -> Self {
        Self { frontend_url }
    }

    /// All allowed origins, configured origin first, without duplicates
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = Vec::with_capacity(2);
        if let Some(url) = &self.frontend_url {
            origins.push(url.trim_end_matches('/').to_string());
        }
        if !origins.iter().any(|o| o == LOCAL_DEV_ORIGIN) {
            origins.push(LOCAL_DEV_ORIGIN.to_string());
        }
        origins
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            frontend_url: env_optional("FRONTEND_URL"),
        })
    }
}
