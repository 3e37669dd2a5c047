use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Everything the pipeline reads from the environment, loaded once at startup.
///
/// Credentials are optional here because no single stage needs all of them;
/// the per-component accessors ([`AppConfig::collector`] etc.) turn an absent
/// credential into a [`ConfigError`] before any work starts.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub source_url: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub table_name: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub raw_blob_path: PathBuf,
    pub structured_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub prompt_max_chars: usize,
    pub dashboard_cache_ttl_secs: u64,
    pub dashboard_max_rows: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("source_url", &self.source_url)
            .field("supabase_url", &self.supabase_url)
            .field(
                "supabase_key",
                &self.supabase_key.as_ref().map(|_| "[redacted]"),
            )
            .field("table_name", &self.table_name)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("raw_blob_path", &self.raw_blob_path)
            .field("structured_path", &self.structured_path)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("prompt_max_chars", &self.prompt_max_chars)
            .field("dashboard_cache_ttl_secs", &self.dashboard_cache_ttl_secs)
            .field("dashboard_max_rows", &self.dashboard_max_rows)
            .finish()
    }
}

/// Settings for the page-fetch stage.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub source_url: String,
    pub raw_blob_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

/// Settings for the model-completion stage.
#[derive(Clone)]
pub struct StructurerConfig {
    pub source_url: String,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub prompt_max_chars: usize,
    pub raw_blob_path: PathBuf,
    pub structured_path: PathBuf,
}

impl std::fmt::Debug for StructurerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructurerConfig")
            .field("source_url", &self.source_url)
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("prompt_max_chars", &self.prompt_max_chars)
            .field("raw_blob_path", &self.raw_blob_path)
            .field("structured_path", &self.structured_path)
            .finish()
    }
}

/// Connection settings for the hosted table.
#[derive(Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table_name: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("table_name", &self.table_name)
            .finish()
    }
}

/// Settings for the read-only dashboard server.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub store: StoreConfig,
    pub bind_addr: SocketAddr,
    pub cache_ttl_secs: u64,
    pub max_rows: u32,
}

impl AppConfig {
    /// Builds the collector's config value object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `SOURCE_URL` is unset.
    pub fn collector(&self) -> Result<CollectorConfig, ConfigError> {
        let source_url = require(self.source_url.as_ref(), "SOURCE_URL")?;
        Ok(CollectorConfig {
            source_url,
            raw_blob_path: self.raw_blob_path.clone(),
            fetch_timeout_secs: self.fetch_timeout_secs,
            user_agent: self.user_agent.clone(),
        })
    }

    /// Builds the structurer's config value object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `OPENAI_API_KEY` or
    /// `SOURCE_URL` is unset.
    pub fn structurer(&self) -> Result<StructurerConfig, ConfigError> {
        let api_key = require(self.openai_api_key.as_ref(), "OPENAI_API_KEY")?;
        let source_url = require(self.source_url.as_ref(), "SOURCE_URL")?;
        Ok(StructurerConfig {
            source_url,
            api_key,
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
            prompt_max_chars: self.prompt_max_chars,
            raw_blob_path: self.raw_blob_path.clone(),
            structured_path: self.structured_path.clone(),
        })
    }

    /// Builds the store's config value object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `SUPABASE_URL` or
    /// `SUPABASE_KEY` is unset.
    pub fn store(&self) -> Result<StoreConfig, ConfigError> {
        let base_url = require(self.supabase_url.as_ref(), "SUPABASE_URL")?;
        let api_key = require(self.supabase_key.as_ref(), "SUPABASE_KEY")?;
        Ok(StoreConfig {
            base_url,
            api_key,
            table_name: self.table_name.clone(),
        })
    }

    /// Builds the dashboard's config value object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the store credentials are
    /// unset.
    pub fn dashboard(&self) -> Result<DashboardConfig, ConfigError> {
        Ok(DashboardConfig {
            store: self.store()?,
            bind_addr: self.bind_addr,
            cache_ttl_secs: self.dashboard_cache_ttl_secs,
            max_rows: self.dashboard_max_rows,
        })
    }
}

fn require(value: Option<&String>, var: &str) -> Result<String, ConfigError> {
    value
        .filter(|s| !s.is_empty())
        .cloned()
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}
