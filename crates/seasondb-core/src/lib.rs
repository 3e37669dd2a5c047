use thiserror::Error;

mod app_config;
mod config;
mod seasons;

pub use app_config::{
    AppConfig, CollectorConfig, DashboardConfig, Environment, StoreConfig, StructurerConfig,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use seasons::{SeasonRecord, StructuredArtifact, DEFAULT_TEAM, UNKNOWN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
