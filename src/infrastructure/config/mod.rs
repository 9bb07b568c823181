use crate::domain::feed_cache::FeedCachePolicy;
use crate::error::ConfigError;
use serde::Deserialize;
use std::env;

const DEFAULT_MAX_CACHE_AGE_DAYS: u64 = 7;

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub max_cache_age_days: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cache_age_days: DEFAULT_MAX_CACHE_AGE_DAYS,
            log_format: LogFormat::Pretty,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let max_cache_age_days = match env::var("FEED_CACHE_MAX_AGE_DAYS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "FEED_CACHE_MAX_AGE_DAYS",
                    value,
                })?,
            Err(_) => DEFAULT_MAX_CACHE_AGE_DAYS,
        };

        if max_cache_age_days == 0 {
            return Err(ConfigError::NonPositiveDays {
                name: "FEED_CACHE_MAX_AGE_DAYS",
            });
        }

        let config = CacheConfig {
            max_cache_age_days,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn policy(&self) -> FeedCachePolicy {
        FeedCachePolicy::new(self.max_cache_age_days)
    }
}
