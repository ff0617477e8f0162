use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    /// Seed the store with the demo sale on startup.
    pub seed_fixtures: bool,
}

impl AnalyticsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load(DEFAULT_PORT)?;

        Ok(AnalyticsConfig {
            common,
            seed_fixtures: env::var("SEED_FIXTURES")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }
}
