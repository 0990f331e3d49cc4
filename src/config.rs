use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub cms_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:4000".to_string(),
            backend_url_production: "https://api.scm-society.org".to_string(),
            cms_url: "https://cms.scm-society.org".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 20,
        }
    }
}

impl AppConfig {
    /// Load configuration baked in at compile time (see build.rs / .env)
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:4000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.scm-society.org").to_string(),
            cms_url: option_env!("CMS_URL")
                .unwrap_or("https://cms.scm-society.org").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("20").parse().unwrap_or(20),
        }
    }

    /// Backend base URL for the active environment
    pub fn backend_url(&self) -> &str {
        if self.environment == "production" {
            &self.backend_url_production
        } else {
            &self.backend_url_development
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_development_backend() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), config.backend_url_development);
        assert!(!config.is_production());
    }

    #[test]
    fn timeout_is_expressed_in_milliseconds() {
        let config = AppConfig {
            network_timeout_seconds: 20,
            ..AppConfig::default()
        };
        assert_eq!(config.network_timeout_ms(), 20_000);
    }
}
