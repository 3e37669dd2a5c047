use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
///
/// Credentials (`SOURCE_URL`, `SUPABASE_*`, `OPENAI_API_KEY`) are optional at
/// this point; each pipeline stage demands the ones it needs via the
/// per-component accessors on [`AppConfig`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|s| !s.is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("SEASONDB_ENV", "development"));

    let bind_addr = parse_addr("SEASONDB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SEASONDB_LOG_LEVEL", "info");

    let source_url = optional("SOURCE_URL");
    let supabase_url = optional("SUPABASE_URL");
    let supabase_key = optional("SUPABASE_KEY");
    let table_name = or_default("TABLE_NAME", "cowboys_seasons");

    let openai_api_key = optional("OPENAI_API_KEY");
    let openai_base_url = or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");
    let openai_model = or_default("OPENAI_MODEL", "gpt-4o-mini");

    let raw_blob_path = PathBuf::from(or_default("SEASONDB_RAW_BLOB_PATH", "data/raw_blob.txt"));
    let structured_path = PathBuf::from(or_default(
        "SEASONDB_STRUCTURED_PATH",
        "data/structured.json",
    ));

    let fetch_timeout_secs = parse_u64("SEASONDB_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "SEASONDB_USER_AGENT",
        "Mozilla/5.0 (compatible; seasondb/0.1)",
    );
    let prompt_max_chars = parse_usize("SEASONDB_PROMPT_MAX_CHARS", "12000")?;

    let dashboard_cache_ttl_secs = parse_u64("SEASONDB_DASHBOARD_CACHE_TTL_SECS", "60")?;
    let dashboard_max_rows = parse_u32("SEASONDB_DASHBOARD_MAX_ROWS", "500")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        source_url,
        supabase_url,
        supabase_key,
        table_name,
        openai_api_key,
        openai_base_url,
        openai_model,
        raw_blob_path,
        structured_path,
        fetch_timeout_secs,
        user_agent,
        prompt_max_chars,
        dashboard_cache_ttl_secs,
        dashboard_max_rows,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
