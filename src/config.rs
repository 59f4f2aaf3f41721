use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Site configuration
    pub site_host: String,
    pub user_namespace: String,
    pub environment: String,
    pub log_level: String,

    // Localization configuration
    pub i18n_namespace: String,

    // Analytics configuration
    pub analytics_category: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            site_host: env::var("SITE_HOST")
                .unwrap_or_else(|_| "www.rainbow-blog.com".to_string()),
            user_namespace: env::var("USER_NAMESPACE")
                .unwrap_or_else(|_| "User".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            i18n_namespace: env::var("I18N_NAMESPACE")
                .unwrap_or_else(|_| "design-system".to_string()),

            analytics_category: env::var("ANALYTICS_CATEGORY")
                .unwrap_or_else(|_| "on-site-notifications".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_host: "www.rainbow-blog.com".to_string(),
            user_namespace: "User".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            i18n_namespace: "design-system".to_string(),
            analytics_category: "on-site-notifications".to_string(),
        }
    }
}
