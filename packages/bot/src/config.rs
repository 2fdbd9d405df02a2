use anyhow::Result;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_APP_NAME: &str = "Marketplace";
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// Bot configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Name shown to users in onboarding prompts
    pub app_name: String,
    /// Document collection holding per-user preferences
    pub users_collection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            app_name: non_empty_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            users_collection: non_empty_var("USERS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_USERS_COLLECTION.to_string()),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app_name, "Marketplace");
        assert_eq!(config.users_collection, "users");
    }

    #[test]
    fn test_missing_var_is_none() {
        assert!(non_empty_var("BOT_CORE_TEST_SURELY_UNSET_VAR").is_none());
    }
}
